use colored::*;

use expression_builder::Property;

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print a property on one line, marking those that offer "equals any of"
pub fn print_property(property: &Property) {
    let type_name = property.info().field_type.type_name();
    if property.match_any {
        println!("  {} {} {}", property, type_name.dimmed(), "[any]".cyan());
    } else {
        println!("  {} {}", property, type_name.dimmed());
    }
}

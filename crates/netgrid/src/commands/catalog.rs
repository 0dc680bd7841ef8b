use colored::Colorize;
use netgrid::catalog::catalog;

pub fn run() {
    for template in catalog() {
        println!(
            "{:<14} {:>3} pts  {}",
            template.name.bold(),
            template.points,
            template.icon.dimmed()
        );
    }
}

//! Output module for rendering recipes and the end-of-run report
//!
//! All reader-facing output goes through here: each recipe is printed as its
//! page completes, and the crawl report is printed once at termination.

use crate::crawler::CrawlReport;
use crate::extract::Recipe;

/// Prints a recipe in its human-readable form
///
/// Layout: author and title lines, the metadata lines, the ingredient list,
/// then numbered instruction steps.
pub fn print_recipe(recipe: &Recipe) {
    println!("Author: {}", recipe.author);
    println!("Recipe: {}", recipe.title);
    for line in &recipe.info {
        println!("{}", line);
    }

    println!("\nIngredients:\n");
    for ingredient in &recipe.ingredients {
        println!("{}", ingredient);
    }

    println!("\nDirections\n");
    for (number, step) in recipe.instructions.iter().enumerate() {
        println!("{}. {}\n", number + 1, step);
    }
    println!();
}

/// Prints the failure list, the visit log, and the summary line
pub fn print_report(report: &CrawlReport) {
    println!("\n=== Crawl Report ===\n");

    if !report.failures.is_empty() {
        println!("Pages that failed to extract:");
        for url in &report.failures {
            println!("  - {}", url);
        }
        println!();
    }

    println!("Visited pages ({}):", report.visited.len());
    for url in &report.visited {
        println!("  - {}", url);
    }
    println!();

    match report.failure_count() {
        0 => println!("There were no errors."),
        count => println!("There were {} errors.", count),
    }
}

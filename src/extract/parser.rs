//! Recipe-page field extraction
//!
//! Selector-level scraping for the recipe site's markup. Each expected page
//! region maps to one selector; a missing region fails the whole extraction.
//! The crawl loop treats all of these failures alike, so no finer taxonomy
//! is exposed.

use crate::extract::{ExtractError, Recipe};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use url::Url;

/// The cross-promotion tile container that holds recommended-recipe links
const RECOMMENDATIONS_SELECTOR: &str = "div.o-Recommendations__TileContainer.o-Recommendations__TileContainer--general.l-Columns.l-Columns--4up";

/// Parses a recipe page, returning the structured record and the
/// recommendation links discovered on it
///
/// Links come back deduplicated, first occurrence wins. An empty
/// recommendations container yields zero links; a page without the container
/// at all is an error.
pub fn parse_recipe(html: &str, url: &str) -> Result<(Recipe, Vec<String>), ExtractError> {
    let document = Html::parse_document(html);

    let author = extract_author(&document).ok_or_else(|| missing(url, "author"))?;
    let title = extract_title(&document).ok_or_else(|| missing(url, "title"))?;
    let info = extract_info(&document).ok_or_else(|| missing(url, "recipe info"))?;
    let ingredients = extract_ingredients(&document).ok_or_else(|| missing(url, "ingredients"))?;
    let instructions =
        extract_instructions(&document).ok_or_else(|| missing(url, "instructions"))?;
    let links =
        extract_recommendations(&document, url).ok_or_else(|| missing(url, "recommendations"))?;

    Ok((
        Recipe {
            author,
            title,
            info,
            ingredients,
            instructions,
        },
        links,
    ))
}

fn missing(url: &str, region: &'static str) -> ExtractError {
    ExtractError::MissingRegion {
        url: url.to_string(),
        region,
    }
}

/// Extracts the author name from the attribution line
///
/// The attribution reads "Recipe courtesy of First Last"; the name is the
/// last two whitespace-separated words.
fn extract_author(document: &Html) -> Option<String> {
    let selector = Selector::parse("span.o-Attribution__a-Name").unwrap();
    let text: String = document.select(&selector).next()?.text().collect();

    let words: Vec<&str> = text.split_whitespace().collect();
    match words.as_slice() {
        [] => None,
        [only] => Some((*only).to_string()),
        [.., first, last] => Some(format!("{} {}", first, last)),
    }
}

/// Extracts the full recipe title
fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("span.o-AssetTitle__a-HeadlineText").unwrap();

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extracts the recipe metadata lines (level, times, yield, nutrition)
///
/// Nutrition facts arrive as a <dt>/<dd> definition list inside one of the
/// list items and are rendered as "name: value" lines. The site repeats info
/// blocks for responsive layouts, so the result is deduplicated preserving
/// first occurrence.
fn extract_info(document: &Html) -> Option<Vec<String>> {
    let block_selector = Selector::parse("div.o-RecipeInfo").unwrap();
    let item_selector = Selector::parse("li").unwrap();
    let nutrition_selector = Selector::parse("section.o-NutritionInfo").unwrap();
    let name_selector = Selector::parse("dt").unwrap();
    let value_selector = Selector::parse("dd").unwrap();

    let block = document.select(&block_selector).next()?;

    let mut lines = Vec::new();
    for item in block.select(&item_selector) {
        if let Some(nutrition) = item.select(&nutrition_selector).next() {
            let names = nutrition.select(&name_selector).map(collapse_text);
            let values: Vec<String> = nutrition.select(&value_selector).map(collapse_text).collect();
            for (name, value) in names.zip(values) {
                lines.push(format!("{}: {}", name, value));
            }
        } else {
            lines.push(collapse_text(item));
        }
    }

    dedup_preserving_order(&mut lines);
    Some(lines)
}

/// Extracts the ingredient lines
fn extract_ingredients(document: &Html) -> Option<Vec<String>> {
    let block_selector = Selector::parse("div.o-Ingredients__m-Body").unwrap();
    let line_selector = Selector::parse("p").unwrap();

    let block = document.select(&block_selector).next()?;
    Some(block.select(&line_selector).map(collapse_text).collect())
}

/// Extracts the cooking instruction steps
fn extract_instructions(document: &Html) -> Option<Vec<String>> {
    let block_selector = Selector::parse("div.o-Method__m-Body").unwrap();
    let step_selector = Selector::parse("li").unwrap();

    let block = document.select(&block_selector).next()?;
    Some(block.select(&step_selector).map(collapse_text).collect())
}

/// Extracts the recommended-recipe links from the cross-promotion region
fn extract_recommendations(document: &Html, page_url: &str) -> Option<Vec<String>> {
    let block_selector = Selector::parse(RECOMMENDATIONS_SELECTOR).unwrap();
    let anchor_selector = Selector::parse("a[href]").unwrap();

    let block = document.select(&block_selector).next()?;
    let base = Url::parse(page_url).ok();

    let mut links = Vec::new();
    for anchor in block.select(&anchor_selector) {
        if let Some(href) = anchor.value().attr("href") {
            if let Some(link) = resolve_recommendation(href, base.as_ref()) {
                links.push(link);
            }
        }
    }

    dedup_preserving_order(&mut links);
    Some(links)
}

/// Resolves a recommendation href to an absolute URL
///
/// The site emits protocol-relative hrefs ("//www.example.com/recipes/...")
/// in its tile container, which get an https scheme. Absolute http(s) links
/// pass through untouched; anything else is resolved against the page URL.
///
/// Returns None for non-navigational hrefs:
/// - javascript:, mailto:, tel: schemes
/// - fragment-only links (same page anchors)
/// - empty hrefs
fn resolve_recommendation(href: &str, base: Option<&Url>) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:") || href.starts_with("mailto:") || href.starts_with("tel:") {
        return None;
    }

    if let Some(rest) = href.strip_prefix("//") {
        return Some(format!("https://{}", rest));
    }

    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }

    base?.join(href).ok().map(|resolved| resolved.to_string())
}

/// Collapses runs of whitespace (including newlines from markup indentation)
/// into single spaces
fn collapse_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes duplicates in place, keeping the first occurrence of each item
fn dedup_preserving_order(items: &mut Vec<String>) {
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}

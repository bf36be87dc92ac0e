//! CLI command printing the navigation menu

use std::io::Write;

use clap::Args;

use crate::error::CarteiraResult;
use crate::navigation::{Route, MENU_ITEMS};
use crate::screens::page_for;

#[derive(Args, Debug)]
pub struct MenuArgs {
    /// Resolve a path against the route table and describe its screen
    #[arg(long, value_name = "PATH")]
    pub resolve: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Handle the menu command
pub fn handle_menu_command<W: Write>(args: &MenuArgs, out: &mut W) -> CarteiraResult<()> {
    if let Some(path) = &args.resolve {
        let route = Route::resolve(path)?;
        return describe_route(route, args.json, out);
    }

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(MENU_ITEMS)?)?;
        return Ok(());
    }

    let label_width = MENU_ITEMS
        .iter()
        .map(|item| item.label.chars().count())
        .max()
        .unwrap_or(0);
    for item in MENU_ITEMS {
        let padding = label_width - item.label.chars().count();
        writeln!(
            out,
            "{} {}{}  {:<24} {}",
            item.glyph(),
            item.label,
            " ".repeat(padding),
            item.route.path(),
            item.description.unwrap_or("")
        )?;
    }
    Ok(())
}

fn describe_route<W: Write>(route: Route, json: bool, out: &mut W) -> CarteiraResult<()> {
    let page = page_for(route);
    if json {
        let value = serde_json::json!({
            "route": route,
            "title": route.title(),
            "description": page.map(|p| p.description),
            "features": page.map(|p| p.features).unwrap_or_default(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    writeln!(out, "{} ({})", route.title(), route.path())?;
    match page {
        Some(page) => {
            writeln!(out, "{}", page.description)?;
            if !page.features.is_empty() {
                writeln!(out)?;
                writeln!(out, "{}:", crate::screens::pages::FEATURES_HEADING)?;
                for feature in page.features {
                    writeln!(out, "  - {}", feature)?;
                }
            }
        }
        None => writeln!(out, "Painel de gastos com gráficos e cartão da persona.")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(resolve: Option<&str>, json: bool) -> CarteiraResult<String> {
        let mut out = Vec::new();
        handle_menu_command(
            &MenuArgs {
                resolve: resolve.map(String::from),
                json,
            },
            &mut out,
        )?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_menu_lists_every_entry() {
        let text = run(None, false).unwrap();
        assert_eq!(text.lines().count(), MENU_ITEMS.len());
        assert!(text.contains("/gastos-extraordinarios"));
        assert!(text.contains("Registre novos gastos"));
    }

    #[test]
    fn test_resolve_empty_path_goes_home() {
        let text = run(Some(""), false).unwrap();
        assert!(text.starts_with("Início (/home)"));
    }

    #[test]
    fn test_resolve_about_page() {
        let text = run(Some("/sobre"), false).unwrap();
        assert!(text.contains("Funcionalidades:"));
        assert!(text.contains("  - Relatórios e gráficos"));
    }

    #[test]
    fn test_resolve_unknown_path() {
        let err = run(Some("/nada"), false).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_menu_json() {
        let text = run(None, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[3]["route"], "/gastos-extraordinarios");
    }
}

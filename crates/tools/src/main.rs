use std::env;
use std::fs;

use layout::StoreLayout;
use scene::svg::write_svg;
use serde::Serialize;
use wayfinding::resolver::{find_aisle, find_shelf, zone_of_shelf};
use wayfinding::{render_map, HighlightHint, SuggestedPath};

fn main() {
    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "render" => cmd_render(args),
        "locate" => cmd_locate(args),
        "validate" => cmd_validate(),
        _ => Err(usage()),
    }
}

fn usage() -> String {
    [
        "usage:",
        "  wayfinder render <out.svg> [--zone NAME] [--aisle LABEL] [--shelf CODE] [--height H]",
        "  wayfinder locate <shelf-code>",
        "  wayfinder validate",
    ]
    .join("\n")
}

fn demo_layout() -> Result<StoreLayout, String> {
    StoreLayout::demo_store().map_err(|e| format!("layout validation failed: {e}"))
}

#[derive(Debug, PartialEq)]
struct RenderArgs {
    out: String,
    hint: HighlightHint,
    height: f64,
}

fn parse_render_args(args: Vec<String>) -> Result<RenderArgs, String> {
    let mut out: Option<String> = None;
    // File renders default to the desktop tier, which carries every label.
    let mut parsed = RenderArgs {
        out: String::new(),
        hint: HighlightHint::default(),
        height: 48.0,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--zone" => parsed.hint.zone = Some(take_value(&mut iter, "--zone")?),
            "--aisle" => parsed.hint.aisle = Some(take_value(&mut iter, "--aisle")?),
            "--shelf" => parsed.hint.shelf = Some(take_value(&mut iter, "--shelf")?),
            "--height" => {
                let raw = take_value(&mut iter, "--height")?;
                parsed.height = raw
                    .parse::<f64>()
                    .map_err(|e| format!("invalid --height {raw}: {e}"))?;
            }
            _ if arg.starts_with("--") => return Err(format!("unknown flag {arg}")),
            _ => {
                if out.is_some() {
                    return Err(usage());
                }
                out = Some(arg);
            }
        }
    }

    parsed.out = out.ok_or_else(usage)?;
    Ok(parsed)
}

fn take_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    iter.next().ok_or_else(|| format!("{flag} needs a value"))
}

fn cmd_render(args: Vec<String>) -> Result<(), String> {
    let parsed = parse_render_args(args)?;
    let layout = demo_layout()?;
    let svg = write_svg(&render_map(&layout, &parsed.hint, parsed.height));
    fs::write(&parsed.out, svg).map_err(|e| format!("write {}: {e}", parsed.out))?;
    println!("wrote {}", parsed.out);
    Ok(())
}

#[derive(Debug, Serialize)]
struct LocateOutput {
    zone: String,
    aisle: String,
    shelf: String,
    path: Vec<[f64; 2]>,
}

fn cmd_locate(args: Vec<String>) -> Result<(), String> {
    let [code] = args.as_slice() else {
        return Err(usage());
    };

    let layout = demo_layout()?;
    let shelf = find_shelf(&layout, Some(code.as_str()))
        .ok_or_else(|| format!("no shelf matches {code}"))?;
    let aisle = find_aisle(&layout, Some(shelf.aisle_label.as_str()))
        .ok_or_else(|| format!("shelf {} has no aisle", shelf.code))?;
    let zone = zone_of_shelf(&layout, shelf)
        .ok_or_else(|| format!("aisle {} has no zone", aisle.label))?;
    let path = SuggestedPath::to_shelf(&layout, Some(shelf))
        .map(|p| p.points().iter().map(|pt| [pt.x, pt.y]).collect())
        .unwrap_or_default();

    let output = LocateOutput {
        zone: zone.name.clone(),
        aisle: aisle.label.clone(),
        shelf: shelf.code.clone(),
        path,
    };
    let json = serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn cmd_validate() -> Result<(), String> {
    let layout = demo_layout()?;
    println!(
        "layout ok: {} zones, {} aisles, {} shelves",
        layout.zones().len(),
        layout.aisles().len(),
        layout.shelves().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_render_args;

    #[test]
    fn render_args_parse_flags_in_any_order() {
        let parsed = parse_render_args(
            ["--shelf", "S1-L1", "map.svg", "--height", "36"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap();
        assert_eq!(parsed.out, "map.svg");
        assert_eq!(parsed.hint.shelf.as_deref(), Some("S1-L1"));
        assert_eq!(parsed.height, 36.0);
    }

    #[test]
    fn render_args_require_an_output_path() {
        assert!(parse_render_args(vec!["--shelf".to_string(), "S1-L1".to_string()]).is_err());
    }

    #[test]
    fn render_args_reject_unknown_flags() {
        assert!(
            parse_render_args(vec!["map.svg".to_string(), "--legend".to_string()]).is_err()
        );
    }
}

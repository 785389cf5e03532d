use crate::node::{Scene, SceneNode, Stroke, TextAnchor, TextBaseline};

/// Serializes the scene into a single standalone `<svg>` document.
///
/// The viewBox is the scene's coordinate space and `preserveAspectRatio` is
/// `xMidYMid meet`: consumers scale uniformly, center, never stretch. Output
/// is deterministic, so equal scenes serialize to byte-identical documents.
pub fn write_svg(scene: &Scene) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" preserveAspectRatio=\"xMidYMid meet\">",
        scene.width, scene.height
    ));
    for node in &scene.nodes {
        write_node(&mut out, node);
    }
    out.push_str("</svg>");
    out
}

fn write_node(out: &mut String, node: &SceneNode) {
    match node {
        SceneNode::Rect {
            bounds,
            corner_radius,
            fill,
            stroke,
            opacity,
        } => {
            out.push_str(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                bounds.x, bounds.y, bounds.width, bounds.height
            ));
            if *corner_radius > 0.0 {
                out.push_str(&format!(" rx=\"{corner_radius}\""));
            }
            out.push_str(&format!(" fill=\"{fill}\""));
            if let Some(stroke) = stroke {
                push_stroke(out, stroke);
            }
            push_opacity(out, *opacity);
            out.push_str("/>");
        }
        SceneNode::Circle {
            center,
            radius,
            fill,
            stroke,
            opacity,
        } => {
            out.push_str(&format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"",
                center.x, center.y, radius, fill
            ));
            if let Some(stroke) = stroke {
                push_stroke(out, stroke);
            }
            push_opacity(out, *opacity);
            out.push_str("/>");
        }
        SceneNode::Line {
            from,
            to,
            stroke,
            opacity,
        } => {
            out.push_str(&format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
                from.x, from.y, to.x, to.y
            ));
            push_stroke(out, stroke);
            push_opacity(out, *opacity);
            out.push_str("/>");
        }
        SceneNode::Polyline {
            points,
            stroke,
            dash,
            round_cap,
            opacity,
        } => {
            let joined: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
            out.push_str(&format!(
                "<polyline points=\"{}\" fill=\"none\"",
                joined.join(" ")
            ));
            push_stroke(out, stroke);
            if let Some((dash_len, gap_len)) = dash {
                out.push_str(&format!(" stroke-dasharray=\"{dash_len} {gap_len}\""));
            }
            if *round_cap {
                out.push_str(" stroke-linecap=\"round\"");
            }
            push_opacity(out, *opacity);
            out.push_str("/>");
        }
        SceneNode::Text {
            position,
            content,
            size,
            weight,
            letter_spacing,
            fill,
            anchor,
            baseline,
            opacity,
        } => {
            out.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-weight=\"{}\"",
                position.x, position.y, size, weight
            ));
            if let Some(spacing) = letter_spacing {
                out.push_str(&format!(" letter-spacing=\"{spacing}\""));
            }
            out.push_str(&format!(" fill=\"{fill}\""));
            match anchor {
                TextAnchor::Start => {}
                TextAnchor::Middle => out.push_str(" text-anchor=\"middle\""),
                TextAnchor::End => out.push_str(" text-anchor=\"end\""),
            }
            match baseline {
                TextBaseline::Auto => {}
                TextBaseline::Middle => out.push_str(" dominant-baseline=\"middle\""),
                TextBaseline::Central => out.push_str(" dominant-baseline=\"central\""),
            }
            push_opacity(out, *opacity);
            out.push_str(&format!(">{}</text>", escape_text(content)));
        }
    }
}

fn push_stroke(out: &mut String, stroke: &Stroke) {
    out.push_str(&format!(
        " stroke=\"{}\" stroke-width=\"{}\"",
        stroke.paint, stroke.width
    ));
}

fn push_opacity(out: &mut String, opacity: f32) {
    if opacity != 1.0 {
        out.push_str(&format!(" opacity=\"{opacity}\""));
    }
}

fn escape_text(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

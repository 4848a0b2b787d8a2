//! Interactive HTML rendering of a profile.
//!
//! The bubble grid and gene frequencies are serialized as Plotly figures and
//! drawn client-side by plotly.js.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::error::{AbxError, Result};
use crate::phenotype::PhenotypeCall;
use crate::plot::{BubblePlot, GeneFrequencyEntry};

use super::model::Profile;

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Diameter in pixels of the largest bubble.
const MAX_BUBBLE_DIAMETER: f64 = 32.0;
const ROW_HEIGHT: usize = 40;
const FREQUENCY_BAR_COLOUR: &str = "rgb(68, 119, 170)";

#[derive(Debug, Serialize)]
struct Figure<'a> {
    data: Vec<Trace<'a>>,
    layout: Value,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Trace<'a> {
    Scatter(BubbleTrace<'a>),
    Bar(FrequencyTrace<'a>),
}

/// One trace per phenotype call, so the legend doubles as the colour key.
#[derive(Debug, Serialize)]
struct BubbleTrace<'a> {
    name: &'static str,
    mode: &'static str,
    x: Vec<&'a str>,
    y: Vec<&'a str>,
    text: Vec<&'a str>,
    textposition: &'static str,
    hovertext: Vec<String>,
    hoverinfo: &'static str,
    marker: Marker<'a>,
}

#[derive(Debug, Serialize)]
struct FrequencyTrace<'a> {
    name: &'static str,
    x: Vec<&'a str>,
    y: Vec<f64>,
    hovertext: Vec<String>,
    marker: Marker<'a>,
}

#[derive(Debug, Serialize)]
struct Marker<'a> {
    color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<Vec<f64>>,
}

/// Write `<dir>/<name>.html`. Refuses to overwrite an existing export.
pub fn export_html(profile: &Profile, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let path = dir.join(format!("{}.html", profile.name));
    if path.exists() {
        return Err(AbxError::OutputExists(path));
    }

    let html = render_html(profile)?;
    fs::create_dir_all(dir).map_err(|e| AbxError::io(dir, e))?;
    fs::write(&path, html).map_err(|e| AbxError::io(&path, e))?;

    info!(path = %path.display(), "exported profile");
    Ok(path)
}

/// Render a profile as an HTML page with embedded Plotly figures.
pub fn render_html(profile: &Profile) -> Result<String> {
    let title = escape(&profile.name);
    let phenotypes = script_json(&bubble_figure(&profile.plot))?;

    let mut html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <script src=\"{PLOTLY_JS}\"></script>\n\
         <style>body{{font-family:sans-serif;margin:2em}}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n<p>Created {created}</p>\n\
         <h2>Phenotypes</h2>\n<div id=\"phenotypes\"></div>\n",
        created = profile.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
    );

    let mut script = format!(
        "const phenotypes = {phenotypes};\n\
         Plotly.newPlot(\"phenotypes\", phenotypes.data, phenotypes.layout);\n"
    );

    if let Some(frequencies) = &profile.gene_frequencies {
        let figure = script_json(&frequency_figure(frequencies))?;
        html.push_str("<h2>Gene frequencies</h2>\n<div id=\"frequencies\"></div>\n");
        script.push_str(&format!(
            "const frequencies = {figure};\n\
             Plotly.newPlot(\"frequencies\", frequencies.data, frequencies.layout);\n"
        ));
    }

    html.push_str("<script>\n");
    html.push_str(&script);
    html.push_str("</script>\n</body>\n</html>\n");
    Ok(html)
}

fn bubble_figure(plot: &BubblePlot) -> Figure<'_> {
    let max_size = plot.max_marker_size().max(1) as f64;

    let data = PhenotypeCall::ALL
        .into_iter()
        .filter_map(|call| {
            let cells: Vec<_> = plot.cells.iter().filter(|c| c.call == call).collect();
            if cells.is_empty() {
                return None;
            }
            Some(Trace::Scatter(BubbleTrace {
                name: call.label(),
                mode: "markers+text",
                x: cells.iter().map(|c| c.antibiotic.as_str()).collect(),
                y: cells.iter().map(|c| c.isolate.as_str()).collect(),
                text: cells.iter().map(|c| c.text.as_str()).collect(),
                textposition: "middle center",
                hovertext: cells
                    .iter()
                    .map(|c| {
                        format!(
                            "{} / {}: {}<br>{}",
                            c.isolate,
                            c.antibiotic,
                            call.label(),
                            c.annotation_text()
                        )
                    })
                    .collect(),
                hoverinfo: "text",
                marker: Marker {
                    color: plot.colours.colour_for(call),
                    size: Some(
                        cells
                            .iter()
                            .map(|c| c.marker_size as f64 / max_size * MAX_BUBBLE_DIAMETER)
                            .collect(),
                    ),
                },
            }))
        })
        .collect();

    let layout = json!({
        "height": 160 + plot.isolates.len() * ROW_HEIGHT,
        "plot_bgcolor": "white",
        "xaxis": {
            "type": "category",
            "side": "top",
            "tickangle": -45,
            "categoryorder": "array",
            "categoryarray": plot.antibiotics,
        },
        "yaxis": {
            "type": "category",
            "autorange": "reversed",
            "categoryorder": "array",
            "categoryarray": plot.isolates,
        },
        "legend": { "title": { "text": "Phenotype" } },
    });

    Figure { data, layout }
}

fn frequency_figure(frequencies: &[GeneFrequencyEntry]) -> Figure<'_> {
    let trace = FrequencyTrace {
        name: "Gene frequency",
        x: frequencies.iter().map(|f| f.gene.as_str()).collect(),
        y: frequencies.iter().map(|f| f.frequency).collect(),
        hovertext: frequencies.iter().map(|f| f.isolates.join(", ")).collect(),
        marker: Marker {
            color: FREQUENCY_BAR_COLOUR,
            size: None,
        },
    };

    let layout = json!({
        "xaxis": { "title": { "text": "Gene" }, "tickangle": -45 },
        "yaxis": { "title": { "text": "Isolates (%)" }, "range": [0, 100] },
    });

    Figure {
        data: vec![Trace::Bar(trace)],
        layout,
    }
}

/// JSON safe to inline in a `<script>` element.
fn script_json(figure: &Figure<'_>) -> Result<String> {
    Ok(serde_json::to_string(figure)?.replace("</", "<\\/"))
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

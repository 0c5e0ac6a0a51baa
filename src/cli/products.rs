use std::{fmt, path::PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use principles::{
    Catalog, Color, ColorSpecification, Config, Everything, NameSpecification, Product, Size,
    SizeSpecification, Specification, SpecificationExt,
};
use serde::Serialize;
use tracing::instrument;

use super::terminal::{is_narrow, swatch, Style};

type BoxedSpecification = Box<dyn Specification<Product>>;

/// Command arguments for `dp products`.
#[derive(Debug, Parser, Default)]
#[command(about = "List products matching a set of filters")]
pub struct Products {
    /// Keep products of any of these colours (comma-separated, case-insensitive).
    #[arg(long, value_delimiter = ',', value_name = "COLOR")]
    color: Vec<Color>,

    /// Keep products of any of these sizes (comma-separated, case-insensitive).
    #[arg(long, value_delimiter = ',', value_name = "SIZE")]
    size: Vec<Size>,

    /// Drop products of these sizes (comma-separated, case-insensitive).
    #[arg(long, value_delimiter = ',', value_name = "SIZE")]
    exclude_size: Vec<Size>,

    /// Regular expression matched against the product name.
    #[arg(long, value_name = "REGEX")]
    name: Option<String>,

    /// TOML catalog to read instead of the configured one.
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Suppress headers and summaries for scripting.
    #[arg(long)]
    quiet: bool,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
struct SerializableRow<'a> {
    name: &'a str,
    color: Color,
    size: Size,
}

impl<'a> From<&'a Product> for SerializableRow<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            name: product.name(),
            color: product.color(),
            size: product.size(),
        }
    }
}

impl Products {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, mut config: Config) -> anyhow::Result<()> {
        if let Some(catalog) = self.catalog.clone() {
            config.set_catalog(Some(catalog));
        }

        let catalog = match config.catalog() {
            Some(path) => Catalog::load(path)?,
            None => {
                tracing::debug!("No catalog configured, using the built-in products");
                Catalog::default_products()
            }
        };

        let spec = self.specification()?;
        let matches: Vec<&Product> = catalog.filter(&spec).collect();
        tracing::info!("{} of {} products matched", matches.len(), catalog.len());

        match self.output {
            OutputFormat::Table => render_table(&matches, catalog.len(), self.quiet),
            OutputFormat::Json => render_json(&matches)?,
            OutputFormat::Csv => render_csv(&matches, self.quiet),
        }

        Ok(())
    }

    /// Build the specification described by the command-line flags.
    ///
    /// Values within a flag are OR'ed together, and the flags are AND'ed. With
    /// no flags every product matches.
    fn specification(&self) -> anyhow::Result<BoxedSpecification> {
        let mut spec: BoxedSpecification = Box::new(Everything);

        if let Some(colors) = any_of(self.color.iter().copied().map(ColorSpecification::new)) {
            spec = Box::new(spec.and(colors));
        }

        if let Some(sizes) = any_of(self.size.iter().copied().map(SizeSpecification::new)) {
            spec = Box::new(spec.and(sizes));
        }

        for size in &self.exclude_size {
            spec = Box::new(spec.and(SizeSpecification::new(*size).not()));
        }

        if let Some(pattern) = &self.name {
            let name = NameSpecification::new(pattern)
                .with_context(|| format!("invalid regex: {pattern}"))?;
            spec = Box::new(spec.and(name));
        }

        Ok(spec)
    }
}

/// OR together a list of specifications. Returns `None` for an empty list.
fn any_of<S>(specs: impl IntoIterator<Item = S>) -> Option<BoxedSpecification>
where
    S: Specification<Product> + 'static,
{
    specs
        .into_iter()
        .map(|spec| Box::new(spec) as BoxedSpecification)
        .reduce(|acc, spec| Box::new(acc.or(spec)))
}

fn render_table(matches: &[&Product], total: usize, quiet: bool) {
    if matches.is_empty() {
        if !quiet {
            println!("{}", "No products match.".warning());
        }
        return;
    }

    if is_narrow() {
        for product in matches {
            println!("{product}");
        }
        return;
    }

    let name_width = matches
        .iter()
        .map(|product| product.name().len())
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap_or_default();
    let color_width = Color::ALL
        .iter()
        .map(|color| color.to_string().len())
        .max()
        .unwrap_or_default();

    if !quiet {
        println!("{:<name_width$}  {:<color_width$}  Size", "Name", "Color");
        println!(
            "{}",
            format!("{:-<name_width$}  {:-<color_width$}  {:-<6}", "", "", "").dim()
        );
    }

    for product in matches {
        let color = format!("{:<color_width$}", product.color());
        println!(
            "{:<name_width$}  {}  {}",
            product.name(),
            swatch(product.color(), &color),
            product.size()
        );
    }

    if !quiet {
        println!();
        println!(
            "{}",
            format!("{} of {total} products", matches.len()).success()
        );
    }
}

fn render_json(matches: &[&Product]) -> anyhow::Result<()> {
    let rows: Vec<SerializableRow<'_>> = matches.iter().copied().map(SerializableRow::from).collect();
    serde_json::to_writer_pretty(std::io::stdout(), &rows)
        .context("failed to render json output")?;
    println!();
    Ok(())
}

fn render_csv(matches: &[&Product], quiet: bool) {
    if !quiet {
        println!("name,color,size");
    }
    for product in matches {
        println!(
            "{},{},{}",
            csv_escape(product.name()),
            product.color(),
            product.size()
        );
    }
}

fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
        })
    }
}

//! Permissive CSV ingestion for product portfolios.
//!
//! This parser feeds an interactive tool, so it is deliberately best-effort:
//! it never fails for the whole input and silently drops rows it cannot use.
//! The operator sees the resulting portfolio immediately after upload, which
//! is the review step. Fields are assumed not to contain commas; there is no
//! quoting or escaping support.

use crate::model::Product;

/// Header columns resolved from their recognized aliases.
struct HeaderIndex {
    name: Option<usize>,
    price: Option<usize>,
    margin: Option<usize>,
}

impl HeaderIndex {
    /// Resolve column positions from a header line. First matching alias
    /// wins for each column.
    fn resolve(header: &str) -> Self {
        let mut index = Self {
            name: None,
            price: None,
            margin: None,
        };
        for (i, column) in header.split(',').enumerate() {
            let column = column.trim().to_lowercase();
            match column.as_str() {
                "nombre" | "name" if index.name.is_none() => index.name = Some(i),
                "precio" | "price" if index.price.is_none() => index.price = Some(i),
                "margen" | "margen_bruto" | "margin" if index.margin.is_none() => {
                    index.margin = Some(i)
                }
                _ => {}
            }
        }
        index
    }
}

/// Parse loosely formatted CSV text into a product portfolio.
///
/// The first non-empty line is the header; recognized column aliases are
/// `nombre`/`name`, `precio`/`price`, and `margen`/`margen_bruto`/`margin`.
/// Rows with too few fields or unparseable numbers are skipped. A missing
/// name defaults to `P1`, `P2`, ... counting accepted products. A margin
/// greater than 1 is read as a whole-number percentage and divided by 100.
///
/// Never errors: unusable input yields an empty portfolio.
#[must_use]
pub fn parse_products(text: &str) -> Vec<Product> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let Some((header, rows)) = lines.split_first() else {
        return Vec::new();
    };
    if rows.is_empty() {
        return Vec::new();
    }

    let index = HeaderIndex::resolve(header);
    let header_width = header.split(',').count();

    let mut products = Vec::new();
    for row in rows {
        let fields: Vec<&str> = row.split(',').map(str::trim).collect();
        if fields.len() < header_width {
            continue;
        }

        let name = index
            .name
            .and_then(|i| fields.get(i))
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("P{}", products.len() + 1));

        let Some(price) = parse_field(&fields, index.price) else {
            continue;
        };
        let Some(mut margin) = parse_field(&fields, index.margin) else {
            continue;
        };

        // Whole-number percentage heuristic: 35 means 35%, 0.35 means 35%.
        if margin > 1.0 {
            margin /= 100.0;
        }

        products.push(Product::new(name, price, margin));
    }
    products
}

fn parse_field(fields: &[&str], column: Option<usize>) -> Option<f64> {
    fields.get(column?).and_then(|s| s.parse::<f64>().ok())
}

//! Tests for permissive CSV portfolio ingestion

use crate::csv::parse_products;
use crate::model::Product;

#[test]
fn test_spanish_header_with_percentage_margins() {
    let products = parse_products("nombre,precio,margen\nZapatos,1500,35\n");
    assert_eq!(products, vec![Product::new("Zapatos", 1_500.0, 0.35)]);
}

#[test]
fn test_english_header_with_fraction_margins() {
    let products = parse_products("name,price,margin\nShoes,1500,0.35\nCap,300,0.5\n");
    assert_eq!(
        products,
        vec![
            Product::new("Shoes", 1_500.0, 0.35),
            Product::new("Cap", 300.0, 0.5),
        ]
    );
}

#[test]
fn test_header_is_case_insensitive_and_trimmed() {
    let products = parse_products(" Nombre , PRECIO , Margen_Bruto \nGorra,300,50\n");
    assert_eq!(products, vec![Product::new("Gorra", 300.0, 0.5)]);
}

#[test]
fn test_non_numeric_price_drops_row_only() {
    let text = "name,price,margin\nGood,100,0.2\nBad,not-a-number,0.3\nAlso Good,200,0.4\n";
    let products = parse_products(text);
    assert_eq!(
        products,
        vec![
            Product::new("Good", 100.0, 0.2),
            Product::new("Also Good", 200.0, 0.4),
        ]
    );
}

#[test]
fn test_short_row_is_skipped() {
    let products = parse_products("name,price,margin\nOnlyName\nOk,50,0.1\n");
    assert_eq!(products, vec![Product::new("Ok", 50.0, 0.1)]);
}

#[test]
fn test_missing_name_defaults_to_running_count() {
    let text = "precio,margen\n100,20\n200,30\n";
    let products = parse_products(text);
    assert_eq!(
        products,
        vec![Product::new("P1", 100.0, 0.2), Product::new("P2", 200.0, 0.3)]
    );
}

#[test]
fn test_default_name_counts_accepted_rows_not_input_rows() {
    // The bad middle row is dropped, so the third input row becomes P2.
    let text = "precio,margen\n100,20\nbad,20\n300,40\n";
    let products = parse_products(text);
    assert_eq!(
        products,
        vec![Product::new("P1", 100.0, 0.2), Product::new("P2", 300.0, 0.4)]
    );
}

#[test]
fn test_empty_and_header_only_inputs() {
    assert!(parse_products("").is_empty());
    assert!(parse_products("\n\n").is_empty());
    assert!(parse_products("name,price,margin\n").is_empty());
}

#[test]
fn test_blank_lines_are_ignored() {
    let products = parse_products("name,price,margin\n\nShoes,1500,0.35\n\n");
    assert_eq!(products, vec![Product::new("Shoes", 1_500.0, 0.35)]);
}

#[test]
fn test_margin_of_exactly_one_is_kept_as_fraction() {
    let products = parse_products("name,price,margin\nAll,100,1\n");
    assert_eq!(products, vec![Product::new("All", 100.0, 1.0)]);
}

#[test]
fn test_round_trip_of_fraction_margins() {
    let original = vec![
        Product::new("Zapatos", 1_500.0, 0.35),
        Product::new("Gorra", 300.0, 0.5),
        Product::new("Cinturon", 450.0, 0.25),
    ];
    let mut text = String::from("name,price,margin\n");
    for p in &original {
        text.push_str(&format!("{},{},{}\n", p.name, p.price, p.gross_margin));
    }
    assert_eq!(parse_products(&text), original);
}

#[test]
fn test_insertion_order_preserved() {
    let text = "name,price,margin\nC,3,0.3\nA,1,0.1\nB,2,0.2\n";
    let names: Vec<String> = parse_products(text).into_iter().map(|p| p.name).collect();
    assert_eq!(names, ["C", "A", "B"]);
}

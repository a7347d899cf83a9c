use olympic_medals::lookup::Lookup;
use olympic_medals::table::{build_rows, render, HEADERS, RANK_PLACEHOLDER, TOTAL_FOOTNOTE};
use olympic_medals::Country;

fn country(id: &str, name: &str, rank: i32, gold: u32, silver: u32, bronze: u32) -> Country {
    Country {
        id: id.to_string(),
        name: name.to_string(),
        continent: "Europe".to_string(),
        flag_url: format!("https://example.org/{}.svg", id),
        gold_medals: gold,
        silver_medals: silver,
        bronze_medals: bronze,
        total_medals: gold + silver + bronze,
        rank,
        rank_total_medals: rank,
    }
}

#[test]
fn test_ranked_country_renders_exact_integer() {
    let rows = build_rows(&[country("ita", "Italy", 9, 2, 3, 4)], &Lookup::default());
    assert_eq!(rows[0].cells[0], "9");
}

#[test]
fn test_unranked_country_renders_placeholder() {
    let countries = [
        country("ain", "Individual Neutral Athletes", 0, 0, 1, 1),
        country("epr", "Refugee Olympic Team", -1, 0, 0, 0),
    ];
    let rows = build_rows(&countries, &Lookup::default());
    assert_eq!(rows[0].cells[0], RANK_PLACEHOLDER);
    assert_eq!(rows[1].cells[0], RANK_PLACEHOLDER);
}

#[test]
fn test_rows_join_name_override_and_attribute() {
    let lookup = Lookup::builtin();
    let rows = build_rows(&[country("gbr", "GBR", 5, 1, 1, 1)], &lookup);

    assert_eq!(rows[0].cells[1], "Great Britain");
    // gbr has no diamonds entry in the builtin table
    assert_eq!(rows[0].cells[2], "0");

    let rows = build_rows(&[country("chn", "CHN", 2, 9, 8, 7)], &lookup);
    assert_eq!(rows[0].cells[2], "5");
}

#[test]
fn test_rows_keep_collection_order_and_keys() {
    let countries = [
        country("usa", "United States", 1, 9, 9, 9),
        country("chn", "China", 2, 8, 8, 8),
        country("jpn", "Japan", 3, 7, 7, 7),
    ];
    let rows = build_rows(&countries, &Lookup::default());

    let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["usa", "chn", "jpn"]);
}

#[test]
fn test_cell_column_order_is_fixed() {
    let rows = build_rows(&[country("fra", "France", 4, 1, 2, 3)], &Lookup::builtin());
    assert_eq!(
        rows[0].cells,
        [
            "4".to_string(),
            "France".to_string(),
            "2".to_string(),
            "1".to_string(),
            "2".to_string(),
            "3".to_string(),
            "6".to_string(),
        ]
    );
}

#[test]
fn test_render_has_headers_rows_and_footnote() {
    let countries = [
        country("usa", "United States", 1, 9, 9, 9),
        country("ain", "Neutral Athletes", -1, 0, 0, 1),
    ];
    let rendered = render(&build_rows(&countries, &Lookup::default()), false);
    let lines: Vec<&str> = rendered.lines().collect();

    for header in HEADERS {
        assert!(lines[0].contains(header), "missing header {:?}", header);
    }
    assert!(lines[2].contains("United States"));
    assert!(lines[3].starts_with('-'));
    assert!(rendered.ends_with(&format!("{}\n", TOTAL_FOOTNOTE)));
}

#[test]
fn test_render_appends_flag_urls_on_request() {
    let countries = [country("usa", "United States", 1, 9, 9, 9)];
    let rows = build_rows(&countries, &Lookup::default());

    assert!(!render(&rows, false).contains("https://example.org/usa.svg"));
    assert!(render(&rows, true).contains("https://example.org/usa.svg"));
}

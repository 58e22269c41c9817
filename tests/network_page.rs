// Drives the helpers the way the network page does: read the page
// parameters, color nodes by feed, render dates and a legend.
use serde_json::json;
use vizglue::{
    ColorScale, Config, Legend, OverflowPolicy, PALETTE, QueryString, UNKNOWN_COLOR,
    iso_date_to_local, is_in_loose,
};

const FEEDS: [&str; 11] = [
    "BostonHerald",
    "LATimes",
    "NYPost",
    "NYTimes",
    "StLouisPost",
    "USAToday",
    "WallStreetJournal",
    "WashingtonPost",
    "Guardian",
    "Reuters",
    "AP",
];

#[test]
fn test_page_parameters() {
    let qs = QueryString::from_url("http://localhost/viz/network.html?base=NYTimes|42&date=2017-03-01");
    assert_eq!(qs.get("base"), Some("NYTimes|42"));
    assert_eq!(qs.get_or("threshold", "0.6"), "0.6");
    assert_eq!(iso_date_to_local(qs.get("date").unwrap()), "01/03/2017");
}

#[test]
fn test_feed_colors_with_default_config() {
    let mut scale = ColorScale::from_config(&Config::default());
    let colors: Vec<_> = FEEDS.iter().map(|f| scale.color(*f)).collect();

    assert_eq!(&colors[..10], &PALETTE[..]);
    assert_eq!(colors[10], PALETTE[0]);
    assert_eq!(scale.color("NYTimes"), PALETTE[3]);
}

#[test]
fn test_feed_colors_with_fallback_config() {
    let config = Config {
        overflow: OverflowPolicy::Fallback,
        ..Config::default()
    };
    let mut scale = ColorScale::from_config(&config);
    for feed in FEEDS {
        scale.color(feed);
    }

    assert_eq!(scale.peek("AP"), Some(UNKNOWN_COLOR));
    let legend = Legend::from_scale(&scale);
    assert_eq!(legend.entries.len(), 11);
    assert_eq!(legend.entries[10].color.to_hex(), "#CDC9C9");
}

#[test]
fn test_selected_feed_indexes_from_query() {
    // Selections arrive as strings, node data holds feed indexes as numbers
    let selected = [json!(1), json!(3)];
    let qs = QueryString::parse("?feed=3");
    let feed = json!(qs.get("feed").unwrap());
    assert!(is_in_loose(&selected, &feed));
}

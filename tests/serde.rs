#![cfg(feature = "serde")]

use ksh_rs::ksh::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn chart_through_json() {
    const SRC: &str = "title=Json\r\n--\r\nbeat=3/4\r\n1000|01|0o@<180\r\n--\r\n";

    let chart = parse_ksh(SRC, default_config()).unwrap();
    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["metadata"]["title"], "Json");
    assert_eq!(json["blocks"][0]["ticks"][0]["extra"], "@<180");
    assert_eq!(json["blocks"][0]["ticks"][0]["settings"]["beat"], "3/4");

    let back: Chart = serde_json::from_value(json).unwrap();
    assert_eq!(back, chart);
}

use ksh_rs::ksh::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn every_pair_is_stored() {
    const SRC: &str = "title=Sample Song\r\nartist=MikuroXina\r\neffect=Chart Maker\r\nlevel=17\r\nt=150\r\nver=167\r\n--\r\n";

    let chart = parse_ksh(SRC, default_config()).unwrap();
    let metadata = chart.metadata();
    assert_eq!(metadata.len(), 6);
    assert_eq!(metadata.get("title"), Some("Sample Song"));
    assert_eq!(metadata.get("artist"), Some("MikuroXina"));
    assert_eq!(metadata.get("effect"), Some("Chart Maker"));
    assert_eq!(metadata.get("level"), Some("17"));
    assert_eq!(metadata.get("t"), Some("150"));
    assert_eq!(metadata.get("ver"), Some("167"));
    assert_eq!(chart.block_count(), 0);
}

#[test]
fn last_duplicate_wins() {
    const SRC: &str = "t=120\r\ntitle=A\r\nt=180\r\ntitle=B\r\nt=240\r\n--\r\n";

    let chart = parse_ksh(SRC, default_config()).unwrap();
    assert_eq!(chart.metadata().len(), 2);
    assert_eq!(chart.metadata().get("t"), Some("240"));
    assert_eq!(chart.metadata().get("title"), Some("B"));
}

#[test]
fn split_on_first_equal_sign() {
    const SRC: &str = "title=a=b\r\nempty=\r\n=anonymous\r\n--\r\n";

    let chart = parse_ksh(SRC, default_config()).unwrap();
    assert_eq!(chart.metadata().get("title"), Some("a=b"));
    assert_eq!(chart.metadata().get("empty"), Some(""));
    assert_eq!(chart.metadata().get(""), Some("anonymous"));
}

#[test]
fn blank_and_padded_lines() {
    const SRC: &str = "\r\n  title=Padded  \r\n\r\n\t\r\nartist=X\r\n  --  \r\n0000|00|--\r\n--\r\n";

    let chart = parse_ksh(SRC, default_config()).unwrap();
    assert_eq!(chart.metadata().get("title"), Some("Padded"));
    assert_eq!(chart.metadata().get("artist"), Some("X"));
    assert_eq!(chart.block_count(), 1);
}

#[test]
fn malformed_header_line() {
    const SRC: &str = "title=Test\r\n\r\nno equal sign\r\n--\r\n";

    let err = parse_ksh(SRC, default_config()).unwrap_err();
    assert_eq!(err.content(), &ParseError::MalformedHeader { line: 3 });
    assert_eq!(err.line(), 3);
    assert_eq!(&SRC[err.range()], "no equal sign");
}

#[test]
fn metadata_only() {
    // The body is broken, but never read.
    const SRC: &str = "title=Only Header\r\n--\r\n1|2|3\r\n--\r\n";

    let chart = parse_ksh(SRC, default_config().metadata_only(true)).unwrap();
    assert_eq!(chart.metadata().get("title"), Some("Only Header"));
    assert_eq!(chart.block_count(), 0);
    assert!(parse_ksh(SRC, default_config()).is_err());
}

#[test]
fn header_without_separator() {
    let chart = parse_ksh("title=Unclosed\r\nartist=Y", default_config()).unwrap();
    assert_eq!(chart.metadata().len(), 2);
    assert_eq!(chart.metadata().get("artist"), Some("Y"));
    assert_eq!(chart.block_count(), 0);
}

#[test]
fn bom_gives_same_chart() {
    const SRC: &str = "title=BOM\r\n--\r\n1000|00|0o\r\n--\r\n";

    let plain = parse_ksh_bytes(SRC.as_bytes(), default_config()).unwrap();
    let with_bom: Vec<u8> = UTF8_BOM.iter().chain(SRC.as_bytes()).copied().collect();
    let bom = parse_ksh_bytes(&with_bom, default_config()).unwrap();
    assert_eq!(plain, bom);
    assert_eq!(bom.metadata().get("title"), Some("BOM"));

    let bom_str = format!("\u{feff}{SRC}");
    assert_eq!(parse_ksh(&bom_str, default_config()).unwrap(), plain);
}

#[test]
fn bom_keeps_line_numbers_and_positions() {
    let src = "\u{feff}title=X\r\nbroken\r\n--\r\n";

    let err = parse_ksh(src, default_config()).unwrap_err();
    assert_eq!(err.line(), 2);
    assert_eq!(&src[err.range()], "broken");
}

use std::collections::BTreeMap;

use aho_corasick::AhoCorasick;

/// Writes `text` into `buffer`,
/// replacing every `{placeholder}` key of `replacements` with its value.
pub(super) fn replace_text(
    text: &str,
    replacements: &BTreeMap<String, String>,
    buffer: &mut String,
) {
    buffer.clear();

    let (keys, values): (Vec<&str>, Vec<&str>) = replacements
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .unzip();

    let placeholders = AhoCorasick::new(&keys);

    let mut last_end = 0;
    for m in placeholders.find_iter(text) {
        buffer.push_str(&text[last_end..m.start()]);
        buffer.push_str(values[m.pattern()]);
        last_end = m.end();
    }
    buffer.push_str(&text[last_end..]);
}

#[test]
fn replaces_every_placeholder() {
    let replacements = [("{repr}", "C"), ("{ty}", "u32")]
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect::<BTreeMap<String, String>>();
    let mut buffer = String::new();

    replace_text("#[repr({repr})] struct A({ty}, {ty});", &replacements, &mut buffer);
    assert_eq!(buffer, "#[repr(C)] struct A(u32, u32);");

    replace_text("struct {name};", &BTreeMap::new(), &mut buffer);
    assert_eq!(buffer, "struct {name};");
}

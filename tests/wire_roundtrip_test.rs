use itemset::core::transcode;
use itemset::{codec, ItemSet};
use std::fs::File;
use std::io::BufReader;
use tempfile::TempDir;

#[test]
fn encode_decode_file_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let text_path = temp_dir.path().join("transactions.txt");
    let wire_path = temp_dir.path().join("transactions.bin");

    std::fs::write(&text_path, "milk bread eggs\nbread butter\n\nmilk\n").unwrap();

    let input = BufReader::new(File::open(&text_path).unwrap());
    let mut output = File::create(&wire_path).unwrap();
    let written = transcode::encode_transactions(input, &mut output, false).unwrap();
    assert_eq!(written, 3);

    let mut wire = File::open(&wire_path).unwrap();
    let sets = codec::read_batch(&mut wire).unwrap();
    assert_eq!(
        sets,
        vec![
            ItemSet::from_items(["milk", "bread", "eggs"]),
            ItemSet::from_items(["bread", "butter"]),
            ItemSet::from_items(["milk"]),
        ]
    );

    // And back to text.
    let mut wire = File::open(&wire_path).unwrap();
    let mut text = Vec::new();
    let decoded = transcode::decode_transactions(&mut wire, &mut text, false).unwrap();
    assert_eq!(decoded, 3);
    assert_eq!(
        String::from_utf8(text).unwrap(),
        "milk bread eggs\nbread butter\nmilk\n"
    );
}

#[test]
fn encode_with_sort_normalizes_transactions() {
    let temp_dir = TempDir::new().unwrap();
    let wire_path = temp_dir.path().join("sorted.bin");

    let mut output = File::create(&wire_path).unwrap();
    transcode::encode_transactions("c a b\nb a\n".as_bytes(), &mut output, true).unwrap();

    let mut wire = File::open(&wire_path).unwrap();
    let sets = codec::read_batch(&mut wire).unwrap();
    assert_eq!(sets[0], ItemSet::from_items(["a", "b", "c"]));
    assert_eq!(sets[1], ItemSet::from_items(["a", "b"]));
}

#[test]
fn empty_input_produces_empty_output() {
    let mut output = Vec::new();
    let written = transcode::encode_transactions("".as_bytes(), &mut output, false).unwrap();
    assert_eq!(written, 0);
    assert!(output.is_empty());
    assert!(codec::read_batch(&mut output.as_slice()).unwrap().is_empty());
}

#[test]
fn json_decode_survives_labels_with_spaces() {
    let set = ItemSet::from_items(["whole milk", "rye bread"]);
    let mut wire = Vec::new();
    codec::write_batch(std::slice::from_ref(&set), &mut wire).unwrap();

    let mut json = Vec::new();
    transcode::decode_transactions(&mut wire.as_slice(), &mut json, true).unwrap();
    let line = String::from_utf8(json).unwrap();
    let parsed: ItemSet = serde_json::from_str(line.trim_end()).unwrap();
    assert_eq!(parsed, set);
}

#[test]
fn corrupt_file_is_reported_not_decoded() {
    let temp_dir = TempDir::new().unwrap();
    let wire_path = temp_dir.path().join("corrupt.bin");

    let mut bytes = ItemSet::from_items(["a", "b"]).to_bytes().unwrap();
    bytes.truncate(bytes.len() - 1);
    std::fs::write(&wire_path, &bytes).unwrap();

    let mut wire = File::open(&wire_path).unwrap();
    let mut sink = Vec::new();
    let result = transcode::decode_transactions(&mut wire, &mut sink, false);
    assert!(result.is_err());
    assert!(sink.is_empty());
}

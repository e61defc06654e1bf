use coreex::{extract_bytes, extract_bytes_with_options, Options};

#[test]
fn latin1_bytes_decode_through_meta_charset() {
    // "café" with é as the single ISO-8859-1 byte 0xE9.
    let html: &[u8] =
        b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Un caf\xE9 noir et une histoire assez longue pour l'extraction.</p></body></html>";

    let result = extract_bytes(html);
    match result {
        Ok(result) => assert!(result.content_text.contains("café")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn windows1252_bytes_decode_through_http_equiv() {
    // 0x92 is the windows-1252 right single quotation mark.
    let html: &[u8] =
        b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\"></head><body><p>It\x92s a story with plenty of words for the extractor to count.</p></body></html>";

    let result = extract_bytes(html);
    match result {
        Ok(result) => assert!(result.content_text.contains("It\u{2019}s")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn plain_utf8_bytes_work_without_declaration() {
    let html = "<html><body><p>Ordinary UTF-8 text, nothing to transcode.</p></body></html>";

    let result = extract_bytes(html.as_bytes());
    match result {
        Ok(result) => assert!(result.content_text.contains("nothing to transcode")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn byte_facade_accepts_custom_options() {
    let html = "<html><body><p>Byte input with options plumbed through.</p></body></html>";
    let options = Options {
        threshold: 0.5,
        ..Options::default()
    };

    let result = extract_bytes_with_options(html.as_bytes(), &options);
    match result {
        Ok(result) => assert!(result.content_text.contains("options plumbed through")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

use std::io::Cursor;

use staticd::http::connection::LineAssembler;
use tokio::io::AsyncWriteExt;

#[tokio::test]
async fn test_next_line_splits_on_crlf() {
    let mut stream = Cursor::new(b"GET / HTTP/1.1\r\nHost: x\r\n\r\n".to_vec());
    let mut assembler = LineAssembler::new(1024);

    assert_eq!(
        assembler.next_line(&mut stream).await.unwrap(),
        Some("GET / HTTP/1.1".to_string())
    );
    assert_eq!(
        assembler.next_line(&mut stream).await.unwrap(),
        Some("Host: x".to_string())
    );
    assert_eq!(
        assembler.next_line(&mut stream).await.unwrap(),
        Some(String::new())
    );
}

#[tokio::test]
async fn test_bare_lf_is_line_content() {
    let mut stream = Cursor::new(b"a\nb\r\n\r\n".to_vec());
    let mut assembler = LineAssembler::new(1024);

    assert_eq!(
        assembler.next_line(&mut stream).await.unwrap(),
        Some("a\nb".to_string())
    );
}

#[tokio::test]
async fn test_lone_cr_is_line_content() {
    let mut stream = Cursor::new(b"a\rb\r\n\r\n".to_vec());
    let mut assembler = LineAssembler::new(1024);

    assert_eq!(
        assembler.next_line(&mut stream).await.unwrap(),
        Some("a\rb".to_string())
    );
}

#[tokio::test]
async fn test_eof_discards_partial_line() {
    let mut stream = Cursor::new(b"GET / HTTP/1.1".to_vec());
    let mut assembler = LineAssembler::new(1024);

    assert_eq!(assembler.next_line(&mut stream).await.unwrap(), None);
}

#[tokio::test]
async fn test_eof_on_idle_stream_is_disconnect() {
    let mut stream = Cursor::new(Vec::new());
    let mut assembler = LineAssembler::new(1024);

    assert_eq!(assembler.read_header_block(&mut stream).await.unwrap(), None);
}

#[tokio::test]
async fn test_read_header_block_stops_at_blank_line() {
    let mut stream = Cursor::new(b"GET / HTTP/1.1\r\nHost: x\r\n\r\ntrailing".to_vec());
    let mut assembler = LineAssembler::new(1024);

    let block = assembler.read_header_block(&mut stream).await.unwrap().unwrap();
    assert_eq!(block, vec!["GET / HTTP/1.1".to_string(), "Host: x".to_string()]);
}

#[tokio::test]
async fn test_read_header_block_skips_leading_blank_lines() {
    let mut stream = Cursor::new(b"\r\n\r\nGET / HTTP/1.1\r\n\r\n".to_vec());
    let mut assembler = LineAssembler::new(1024);

    let block = assembler.read_header_block(&mut stream).await.unwrap().unwrap();
    assert_eq!(block, vec!["GET / HTTP/1.1".to_string()]);
}

#[tokio::test]
async fn test_assembler_is_reused_across_cycles() {
    let raw = b"GET /one HTTP/1.1\r\n\r\nGET /two HTTP/1.1\r\nHost: x\r\n\r\n";
    let mut stream = Cursor::new(raw.to_vec());
    let mut assembler = LineAssembler::new(1024);

    let first = assembler.read_header_block(&mut stream).await.unwrap().unwrap();
    assert_eq!(first, vec!["GET /one HTTP/1.1".to_string()]);

    let second = assembler.read_header_block(&mut stream).await.unwrap().unwrap();
    assert_eq!(
        second,
        vec!["GET /two HTTP/1.1".to_string(), "Host: x".to_string()]
    );

    assert_eq!(assembler.read_header_block(&mut stream).await.unwrap(), None);
}

#[tokio::test]
async fn test_incremental_delivery() {
    // Bytes trickling in one at a time must assemble the same lines.
    let (mut client, mut server) = tokio::io::duplex(16);

    let writer = tokio::spawn(async move {
        for byte in b"GET / HTTP/1.1\r\nHost: x\r\n\r\n" {
            client.write_all(&[*byte]).await.unwrap();
        }
        client
    });

    let mut assembler = LineAssembler::new(8);
    let block = assembler.read_header_block(&mut server).await.unwrap().unwrap();
    assert_eq!(block, vec!["GET / HTTP/1.1".to_string(), "Host: x".to_string()]);

    writer.await.unwrap();
}

#[tokio::test]
async fn test_invalid_utf8_line_is_an_error() {
    let mut stream = Cursor::new(b"\xff\xfe\r\n\r\n".to_vec());
    let mut assembler = LineAssembler::new(1024);

    assert!(assembler.next_line(&mut stream).await.is_err());
}

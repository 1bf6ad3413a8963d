use dohparse::*;

const CAPTIVE_APPLE_COM_QUERY: [u8; 48] = [
  30, 252,                                     // ID
  1, 0,                                        // Kind
  0, 1,                                        // Question Count
  0, 0,                                        // Answer Count
  0, 0,                                        // Name Server Count
  0, 0,                                        // Additional Records Count
  7, b'c', b'a', b'p', b't', b'i', b'v', b'e', // Label "captive"
  5, b'a', b'p', b'p', b'l', b'e',             // Label "apple"
  3, b'c', b'o', b'm',                         // Label "com"
  0,                                           // Label End
  0, 1,                                        // Question Kind
  0, 1,                                        // Question Class
  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,       // Trailing bytes, ignored.
];

const EXAMPLE_COM_RESPONSE: [u8; 61] = [
  0x12, 0x34,                                  // ID
  0x81, 0x80,                                  // Kind
  0, 1,                                        // Question Count
  0, 2,                                        // Answer Count
  0, 0,                                        // Name Server Count
  0, 0,                                        // Additional Records Count
  7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', // Label "example", offset 12
  3, b'c', b'o', b'm',                         // Label "com"
  0,                                           // Label End
  0, 1,                                        // Question Kind
  0, 1,                                        // Question Class
  0xC0, 12,                                    // Pointer to "example.com"
  0, 1,                                        // Answer Kind
  0, 1,                                        // Answer Class
  0, 0, 0x0e, 0x10,                            // TTL
  0, 4,                                        // Data Length
  93, 184, 216, 34,                            // Data
  0xC0, 12,                                    // Pointer to "example.com"
  0, 1,                                        // Answer Kind
  0, 1,                                        // Answer Class
  0, 0, 0x0e, 0x10,                            // TTL
  0, 4,                                        // Data Length
  93, 184, 216, 35,                            // Data
];

macro_rules! parse {
  ($req:ident) => {
    let $req = Message::parse(&CAPTIVE_APPLE_COM_QUERY).expect("parsing failed");
  }
}

#[test]
fn test_header_id() {
  parse!(request);
  assert_eq!(request.header().id(), 7932);
}

#[test]
fn test_header_kind() {
  parse!(request);
  assert_eq!(request.header().kind(), HeaderKind::Query);
}

#[test]
fn test_header_opcode() {
  parse!(request);
  assert_eq!(request.header().opcode(), OpCode::Query);
}

#[test]
fn test_header_flags() {
  parse!(request);
  assert!(!request.header().authoritative_answer());
  assert!(!request.header().truncated());
  assert!(request.header().recursion_desired());
  assert!(!request.header().recursion_available());
  assert_eq!(request.header().response_code(), ResponseCode::NoError);
}

#[test]
fn test_header_counts() {
  parse!(request);
  assert_eq!(request.header().question_count(), 1);
  assert_eq!(request.header().answer_count(), 0);
  assert_eq!(request.header().name_server_count(), 0);
  assert_eq!(request.header().additional_records_count(), 0);
}

#[test]
fn test_questions() {
  parse!(request);

  let mut questions = request.questions().iter();

  let question = questions.next().expect("no questions parsed");

  assert_eq!(question.name(), "captive.apple.com");
  assert_eq!(question.name(), "CAPTIVE.APPLE.COM");
  assert_ne!(question.name(), ".captive.apple.com");
  assert_ne!(question.name(), "captive.apple.com.");
  assert_ne!(question.name(), "captive-apple-com");
  assert_eq!(*question.class(), QueryClass::IN);
  assert_eq!(*question.kind(), QueryKind::A);

  assert_eq!(question.name().to_string(), "captive.apple.com".to_string());

  assert!(questions.next().is_none());
}

#[test]
fn test_trailing_bytes_ignored() {
  parse!(request);
  assert!(request.answers().is_empty());
  assert!(request.is_complete());
}

#[test]
fn test_encode_then_parse_query() {
  let query = QueryConfig::default().encode("example.com").expect("encoding failed");
  let message = Message::parse(&query).expect("parsing failed");

  assert_eq!(message.id(), 0x1234);
  assert_eq!(message.questions().len(), 1);
  assert_eq!(message.questions()[0].name().to_string(), "example.com");
  assert_eq!(u16::from(message.questions()[0].kind), 1);
  assert_eq!(u16::from(message.questions()[0].class), 1);
  assert!(message.answers().is_empty());
}

#[test]
fn test_too_short() {
  for len in 0..12 {
    let result = Message::parse(&EXAMPLE_COM_RESPONSE[..len]);
    assert!(matches!(result, Err(Error::TooShort)), "length {} parsed", len);
  }

  assert!(Message::parse(&EXAMPLE_COM_RESPONSE[..12]).is_ok());
}

#[test]
fn test_response() {
  let response = Message::parse(&EXAMPLE_COM_RESPONSE).expect("parsing failed");

  let flags = response.header().flags();
  assert_eq!(flags.kind, HeaderKind::Response);
  assert_eq!(flags.opcode, OpCode::Query);
  assert!(!flags.authoritative_answer);
  assert!(!flags.truncated);
  assert!(flags.recursion_desired);
  assert!(flags.recursion_available);
  assert_eq!(flags.response_code, ResponseCode::NoError);

  let rendered: Vec<_> = response.answers().iter().map(Answer::render).collect();
  assert_eq!(rendered, ["93.184.216.34", "93.184.216.35"]);

  for answer in response.answers() {
    assert_eq!(answer.name(), "example.com");
    assert_eq!(answer.ttl(), 3600);
  }

  assert!(response.is_complete());
}

#[test]
fn test_answers_fewer_than_claimed() {
  let mut buf = EXAMPLE_COM_RESPONSE.to_vec();
  buf[7] = 5;

  let response = Message::parse(&buf).expect("truncated answers are not an error");

  assert_eq!(response.header().answer_count(), 5);
  assert_eq!(response.answers().len(), 2);
  assert!(!response.is_complete());
}

#[test]
fn test_answer_data_cut_off() {
  let response = Message::parse(&EXAMPLE_COM_RESPONSE[..59]).expect("parsing failed");

  assert_eq!(response.answers().len(), 2);
  assert_eq!(response.answers()[0].render(), "93.184.216.34");
  assert_eq!(response.answers()[1].rdata, None);
  assert_eq!(response.answers()[1].render(), "");
}

#[test]
fn test_answer_fields_cut_off() {
  let response = Message::parse(&EXAMPLE_COM_RESPONSE[..50]).expect("parsing failed");

  assert_eq!(response.answers().len(), 1);
}

#[test]
fn test_compression_loop() {
  let buf = [
    0, 0, 0x81, 0x80, 0, 1, 0, 0, 0, 0, 0, 0,
    0xC0, 12,                                  // Pointer to itself
    0, 1, 0, 1,
  ];

  assert!(matches!(Message::parse(&buf), Err(Error::CompressionLoop(12))));
}

#[test]
fn test_compression_loop_in_answer() {
  let mut buf = EXAMPLE_COM_RESPONSE.to_vec();
  // First answer points at the second answer's name, which points back.
  buf[30] = 45;
  buf[46] = 29;

  assert!(matches!(Message::parse(&buf), Err(Error::CompressionLoop(_))));
}

#[test]
fn test_authority_and_additional() {
  let mut buf = EXAMPLE_COM_RESPONSE.to_vec();
  // Move the second answer into the additional section.
  buf[7] = 1;
  buf[11] = 1;

  let response = Message::parse(&buf).expect("parsing failed");

  assert_eq!(response.answers().len(), 1);
  assert!(response.name_servers().is_empty());
  assert_eq!(response.additional_records().len(), 1);
  assert_eq!(response.additional_records()[0].render(), "93.184.216.35");
  assert!(response.is_complete());
}

#[test]
fn test_serialize_response() {
  let response = Message::parse(&EXAMPLE_COM_RESPONSE).expect("parsing failed");
  let json = serde_json::to_value(&response).expect("serialization failed");

  assert_eq!(json["questions"][0]["name"], "example.com");
  assert_eq!(json["answers"][0]["rdata"], "93.184.216.34");
  assert_eq!(json["answers"][1]["ttl"], 3600);
  assert_eq!(json["header"]["flags"]["recursion_available"], true);
}

#[test]
fn test_get_url_round_trip() {
  let query = QueryConfig::default().encode("google.com").expect("encoding failed");
  let url = doh::get_url("https://doh.example/dns-query", &query);

  let param = url.split("dns=").nth(1).expect("missing dns parameter");
  assert!(!param.contains('='));
  assert!(!param.contains('+'));
  assert!(!param.contains('/'));
  assert_eq!(doh::decode_get_param(param).expect("invalid base64url"), query);
}

use core::convert::TryFrom;

use serde::Serialize;

use crate::wire::HEADER_SIZE;
use crate::{Answer, Error, Header, Question};

/// A decoded DNS message.
///
/// Counts in the [`Header`](struct.Header.html) are the ones claimed by the message. A message
/// cut short holds fewer entries than claimed, see [`is_complete`](#method.is_complete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
  header: Header,
  questions: Vec<Question>,
  answers: Vec<Answer>,
  name_servers: Vec<Answer>,
  additional_records: Vec<Answer>,
}

impl Message {
  pub fn builder() -> MessageBuilder {
    MessageBuilder::default()
  }

  /// Parses a message, keeping whatever could be read before the buffer ran out.
  ///
  /// Only a buffer shorter than the header and a compression pointer loop are errors.
  pub fn parse(buf: &[u8]) -> Result<Message, Error> {
    let header = Header::read(buf)?;
    let mut i = HEADER_SIZE;

    let mut questions = Vec::new();
    for n in 0..header.question_count() {
      match Question::read(buf, &mut i)? {
        Some(question) => questions.push(question),
        None => {
          log::debug!("question section truncated after {} of {} questions", n, header.question_count());
          break
        },
      }
    }

    let answers = read_records(buf, &mut i, header.answer_count(), "answer")?;
    let name_servers = read_records(buf, &mut i, header.name_server_count(), "authority")?;
    let additional_records = read_records(buf, &mut i, header.additional_records_count(), "additional")?;

    Ok(Message { header, questions, answers, name_servers, additional_records })
  }

  pub fn header(&self) -> &Header {
    &self.header
  }

  pub fn id(&self) -> u16 {
    self.header.id()
  }

  pub fn questions(&self) -> &[Question] {
    &self.questions
  }

  pub fn answers(&self) -> &[Answer] {
    &self.answers
  }

  pub fn name_servers(&self) -> &[Answer] {
    &self.name_servers
  }

  pub fn additional_records(&self) -> &[Answer] {
    &self.additional_records
  }

  /// Whether every section holds as many entries as the header claims.
  pub fn is_complete(&self) -> bool {
    self.questions.len() == self.header.question_count() as usize
      && self.answers.len() == self.header.answer_count() as usize
      && self.name_servers.len() == self.header.name_server_count() as usize
      && self.additional_records.len() == self.header.additional_records_count() as usize
  }
}

fn read_records(buf: &[u8], i: &mut usize, count: u16, section: &str) -> Result<Vec<Answer>, Error> {
  let mut records = Vec::new();

  for _ in 0..count {
    if *i >= buf.len() {
      break
    }

    match Answer::read(buf, i)? {
      Some(record) => records.push(record),
      None => break,
    }
  }

  if records.len() < count as usize {
    log::debug!("{} section truncated after {} of {} records", section, records.len(), count);
  }

  Ok(records)
}

/// Builder writing a [`Message`](struct.Message.html) in wire format.
///
/// Section counts in the header are set from the added entries.
#[derive(Debug, Default)]
pub struct MessageBuilder {
  header: Header,
  questions: Vec<Question>,
  answers: Vec<Answer>,
}

impl MessageBuilder {
  pub fn header(mut self, header: Header) -> Self {
    self.header = header;
    self
  }

  pub fn question(mut self, question: Question) -> Self {
    self.questions.push(question);
    self
  }

  pub fn answer(mut self, answer: Answer) -> Self {
    self.answers.push(answer);
    self
  }

  /// Writes the message, failing if a count or data length does not fit in 16 bits.
  pub fn build(self) -> Result<Vec<u8>, Error> {
    let Self { mut header, questions, answers } = self;
    header.set_counts(section_count(&questions)?, section_count(&answers)?, 0, 0);

    let mut buf = Vec::with_capacity(HEADER_SIZE + 64);
    header.write(&mut buf);

    for question in &questions {
      question.write(&mut buf);
    }

    for answer in &answers {
      answer.write(&mut buf)?;
    }

    Ok(buf)
  }
}

fn section_count<T>(entries: &[T]) -> Result<u16, Error> {
  u16::try_from(entries.len()).map_err(|_| Error::TooManyEntries(entries.len()))
}

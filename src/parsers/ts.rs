//! Qt Linguist `.ts` document reader.
//!
//! Streams the XML with quick-xml and produces raw entries in document
//! order. Duplicate keys are kept here; collapsing them is the catalog's job.
//!
//! Recognized structure:
//!
//! ```text
//! <TS version="2.1" language="nl_NL" sourcelanguage="en">
//!   <context>
//!     <name>MainWindow</name>
//!     <message [numerus="yes"]>
//!       <location filename="mainwindow.cpp" line="57"/>
//!       <source>%1 voice</source>
//!       <comment>can now transmit ...</comment>
//!       <translation [type="unfinished|vanished|obsolete"]>...</translation>
//!     </message>
//!   </context>
//! </TS>
//! ```
//!
//! Anything else is skipped.

use std::{collections::HashMap, fmt::Display};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::{
    catalog::{Location, Status, TranslationEntry},
    error::ParseError,
    utils::{build_line_index, offset_to_line},
};

/// A parsed `.ts` document before indexing.
#[derive(Debug, Clone, Default)]
pub struct TsDocument {
    pub version: Option<String>,
    pub language: Option<String>,
    pub source_language: Option<String>,
    pub entries: Vec<TranslationEntry>,
}

/// Parse a `.ts` document from raw bytes.
pub fn parse_ts(bytes: &[u8]) -> Result<TsDocument, ParseError> {
    TsReader::new(bytes).read_document()
}

/// Tracks lupdate's relative locations (`line="+3"`, omitted `filename`).
///
/// Reset for every context.
#[derive(Default)]
struct LocationCursor {
    current_file: Option<String>,
    lines: HashMap<String, i64>,
}

impl LocationCursor {
    fn resolve(&mut self, filename: Option<String>, line: Option<String>) -> Option<Location> {
        let file = match filename {
            Some(file) => {
                self.current_file = Some(file.clone());
                file
            }
            None => self.current_file.clone()?,
        };

        let line = line.and_then(|raw| {
            let raw = raw.trim();
            let resolved = if raw.starts_with('+') || raw.starts_with('-') {
                let delta: i64 = raw.parse().ok()?;
                self.lines.get(&file).copied().unwrap_or(0).checked_add(delta)?
            } else {
                raw.parse().ok()?
            };
            // Out-of-range lines are dropped and do not move the cursor.
            let line = u32::try_from(resolved).ok()?;
            self.lines.insert(file.clone(), resolved);
            Some(line)
        });

        Some(Location::new(file, line))
    }
}

/// Text content of a `<translation>` element.
#[derive(Default)]
struct TranslationPayload {
    text: String,
    numerus_forms: Vec<String>,
}

struct TsReader<'a> {
    reader: Reader<&'a [u8]>,
    buf: Vec<u8>,
    line_index: Vec<usize>,
}

impl<'a> TsReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        let mut reader = Reader::from_reader(bytes);
        reader.config_mut().trim_text(false);
        Self {
            reader,
            buf: Vec::new(),
            line_index: build_line_index(bytes),
        }
    }

    fn line(&self) -> usize {
        offset_to_line(&self.line_index, self.reader.buffer_position() as usize)
    }

    fn xml_error(&self, err: impl Display) -> ParseError {
        ParseError::Xml {
            line: self.line(),
            message: err.to_string(),
        }
    }

    fn next_event(&mut self) -> Result<Event<'static>, ParseError> {
        self.buf.clear();
        let result = self
            .reader
            .read_event_into(&mut self.buf)
            .map(Event::into_owned);
        result.map_err(|e| self.xml_error(e))
    }

    fn attribute(&self, start: &BytesStart, name: &[u8]) -> Result<Option<String>, ParseError> {
        for attr in start.attributes() {
            let attr = attr.map_err(|e| self.xml_error(e))?;
            if attr.key.as_ref() == name {
                let value = attr.unescape_value().map_err(|e| self.xml_error(e))?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }

    fn read_document(mut self) -> Result<TsDocument, ParseError> {
        let (root, is_empty) = loop {
            match self.next_event()? {
                Event::Start(start) => break (start, false),
                Event::Empty(start) => break (start, true),
                Event::Eof => return Err(ParseError::Empty),
                _ => {}
            }
        };

        let root_line = self.line();
        if root.name().as_ref() != b"TS" {
            return Err(ParseError::NotACatalog {
                line: root_line,
                found: String::from_utf8_lossy(root.name().as_ref()).into_owned(),
            });
        }

        let mut document = TsDocument {
            version: self.attribute(&root, b"version")?,
            language: self.attribute(&root, b"language")?,
            source_language: self.attribute(&root, b"sourcelanguage")?,
            entries: Vec::new(),
        };
        if is_empty {
            return Ok(document);
        }

        loop {
            match self.next_event()? {
                Event::Start(start) if start.name().as_ref() == b"context" => {
                    let line = self.line();
                    let entries = self.read_context(line)?;
                    document.entries.extend(entries);
                }
                Event::Start(start) => {
                    let line = self.line();
                    self.skip_element(&start, line)?;
                }
                Event::End(_) => return Ok(document),
                Event::Eof => {
                    return Err(ParseError::Unterminated {
                        element: "TS".to_string(),
                        line: root_line,
                    });
                }
                _ => {}
            }
        }
    }

    fn read_context(&mut self, context_line: usize) -> Result<Vec<TranslationEntry>, ParseError> {
        let mut name = String::new();
        let mut entries = Vec::new();
        let mut cursor = LocationCursor::default();

        loop {
            match self.next_event()? {
                Event::Start(start) => {
                    let line = self.line();
                    match start.name().as_ref() {
                        b"name" => name = self.read_text("name", line)?,
                        b"message" => {
                            let numerus =
                                self.attribute(&start, b"numerus")?.as_deref() == Some("yes");
                            let entry = self
                                .read_message(line, numerus, &mut cursor)
                                .map_err(|err| match err {
                                    ParseError::MissingSource { line, .. } => {
                                        ParseError::MissingSource {
                                            context: name.clone(),
                                            line,
                                        }
                                    }
                                    other => other,
                                })?;
                            entries.push(entry);
                        }
                        _ => self.skip_element(&start, line)?,
                    }
                }
                Event::Empty(start) if start.name().as_ref() == b"message" => {
                    return Err(ParseError::MissingSource {
                        context: name,
                        line: self.line(),
                    });
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(ParseError::Unterminated {
                        element: "context".to_string(),
                        line: context_line,
                    });
                }
                _ => {}
            }
        }

        for entry in &mut entries {
            entry.context.clone_from(&name);
        }
        Ok(entries)
    }

    fn read_message(
        &mut self,
        message_line: usize,
        numerus: bool,
        cursor: &mut LocationCursor,
    ) -> Result<TranslationEntry, ParseError> {
        let mut source: Option<String> = None;
        let mut disambiguator: Option<String> = None;
        let mut extra_comment: Option<String> = None;
        let mut translator_comment: Option<String> = None;
        let mut status = Status::Unfinished;
        let mut payload = TranslationPayload::default();
        let mut locations = Vec::new();

        loop {
            match self.next_event()? {
                Event::Start(start) => {
                    let line = self.line();
                    match start.name().as_ref() {
                        b"source" => source = Some(self.read_text("source", line)?),
                        b"comment" => disambiguator = Some(self.read_text("comment", line)?),
                        b"extracomment" => {
                            extra_comment = Some(self.read_text("extracomment", line)?)
                        }
                        b"translatorcomment" => {
                            translator_comment = Some(self.read_text("translatorcomment", line)?)
                        }
                        b"translation" => {
                            let kind = self.attribute(&start, b"type")?;
                            status = Status::from_type_attr(kind.as_deref());
                            payload = self.read_translation(line)?;
                        }
                        b"location" => {
                            let filename = self.attribute(&start, b"filename")?;
                            let location_line = self.attribute(&start, b"line")?;
                            locations.extend(cursor.resolve(filename, location_line));
                            self.skip_element(&start, line)?;
                        }
                        _ => self.skip_element(&start, line)?,
                    }
                }
                Event::Empty(start) => match start.name().as_ref() {
                    b"source" => source = Some(String::new()),
                    b"comment" => disambiguator = Some(String::new()),
                    b"translation" => {
                        let kind = self.attribute(&start, b"type")?;
                        status = Status::from_type_attr(kind.as_deref());
                        payload = TranslationPayload::default();
                    }
                    b"location" => {
                        let filename = self.attribute(&start, b"filename")?;
                        let location_line = self.attribute(&start, b"line")?;
                        locations.extend(cursor.resolve(filename, location_line));
                    }
                    _ => {}
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(ParseError::Unterminated {
                        element: "message".to_string(),
                        line: message_line,
                    });
                }
                _ => {}
            }
        }

        let Some(source_text) = source else {
            return Err(ParseError::MissingSource {
                context: String::new(),
                line: message_line,
            });
        };

        let mut numerus_forms = payload.numerus_forms;
        let translated_text = if numerus {
            numerus_forms.first().cloned().unwrap_or(payload.text)
        } else {
            numerus_forms.clear();
            payload.text
        };

        Ok(TranslationEntry {
            context: String::new(),
            source_text,
            disambiguator,
            translated_text,
            numerus_forms,
            status,
            locations,
            extra_comment,
            translator_comment,
            line: message_line,
        })
    }

    /// Read a `<translation>` body: plain text, numerus forms or length variants.
    fn read_translation(&mut self, start_line: usize) -> Result<TranslationPayload, ParseError> {
        let mut payload = TranslationPayload::default();
        let mut variants: Vec<String> = Vec::new();

        loop {
            match self.next_event()? {
                Event::Text(text) => {
                    let text = text.unescape().map_err(|e| self.xml_error(e))?;
                    payload.text.push_str(&text);
                }
                Event::CData(data) => {
                    let text = std::str::from_utf8(&data).map_err(|e| self.xml_error(e))?;
                    payload.text.push_str(text);
                }
                Event::Start(start) => {
                    let line = self.line();
                    match start.name().as_ref() {
                        b"numerusform" => payload
                            .numerus_forms
                            .push(self.read_text("numerusform", line)?),
                        b"lengthvariant" => variants.push(self.read_text("lengthvariant", line)?),
                        _ => self.skip_element(&start, line)?,
                    }
                }
                Event::Empty(start) => match start.name().as_ref() {
                    b"byte" => {
                        if let Some(c) = self.byte_char(&start)? {
                            payload.text.push(c);
                        }
                    }
                    b"numerusform" => payload.numerus_forms.push(String::new()),
                    _ => {}
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(ParseError::Unterminated {
                        element: "translation".to_string(),
                        line: start_line,
                    });
                }
                _ => {}
            }
        }

        // Whitespace between child elements is not part of the translation.
        if !payload.numerus_forms.is_empty() || !variants.is_empty() {
            payload.text.clear();
        }
        if let Some(first) = variants.into_iter().next() {
            payload.text = first;
        }
        Ok(payload)
    }

    /// Read the text content of a leaf element up to its end tag.
    fn read_text(&mut self, element: &str, start_line: usize) -> Result<String, ParseError> {
        let mut text = String::new();
        loop {
            match self.next_event()? {
                Event::Text(t) => {
                    let t = t.unescape().map_err(|e| self.xml_error(e))?;
                    text.push_str(&t);
                }
                Event::CData(data) => {
                    let t = std::str::from_utf8(&data).map_err(|e| self.xml_error(e))?;
                    text.push_str(t);
                }
                Event::Empty(start) if start.name().as_ref() == b"byte" => {
                    if let Some(c) = self.byte_char(&start)? {
                        text.push(c);
                    }
                }
                Event::Start(start) => {
                    let line = self.line();
                    self.skip_element(&start, line)?;
                }
                Event::End(_) => return Ok(text),
                Event::Eof => {
                    return Err(ParseError::Unterminated {
                        element: element.to_string(),
                        line: start_line,
                    });
                }
                _ => {}
            }
        }
    }

    /// Decode Qt's `<byte value="x1b"/>` escape for characters XML cannot carry.
    fn byte_char(&self, start: &BytesStart) -> Result<Option<char>, ParseError> {
        let Some(value) = self.attribute(start, b"value")? else {
            return Ok(None);
        };
        let code = match value.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => value.parse().ok(),
        };
        Ok(code.and_then(char::from_u32))
    }

    /// Skip an element and all of its children.
    fn skip_element(&mut self, start: &BytesStart, start_line: usize) -> Result<(), ParseError> {
        let mut depth = 1usize;
        loop {
            match self.next_event()? {
                Event::Start(_) => depth += 1,
                Event::End(_) => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                Event::Eof => {
                    return Err(ParseError::Unterminated {
                        element: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
                        line: start_line,
                    });
                }
                _ => {}
            }
        }
    }
}

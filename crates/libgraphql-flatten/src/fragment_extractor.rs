use crate::document_scanner::is_name_start;
use crate::ByteSpan;
use crate::DocumentScanner;
use crate::ExtractedDocument;
use crate::FlattenError;
use crate::FragmentDefinition;
use crate::SourcePosition;
use indexmap::IndexMap;

/// Splits a raw GraphQL document into its operation content and a mapping
/// of fragment name → fragment definition.
///
/// The extractor scans top-level definitions one at a time. A definition
/// whose first name token is `fragment` is parsed as
/// `fragment <Name> on <Type> { … }` and recorded in the fragment map;
/// everything else (named operations, anonymous `{ … }` shorthand) is
/// sliced verbatim out of the source and concatenated, in original order,
/// into the operation text.
///
/// Scanning is depth-aware throughout: braces inside strings, comments,
/// argument object literals, and variable-definition default values never
/// confuse the classification.
///
/// Comments and commas *between* top-level definitions are ignored tokens
/// that belong to no definition; operation spans start at the definition
/// itself, so such comments are not carried into the operation text.
/// Comments inside a definition are part of its span and survive.
pub struct FragmentExtractor<'src> {
    source: &'src str,
    scanner: DocumentScanner<'src>,
}

impl<'src> FragmentExtractor<'src> {
    /// Extracts operation text and fragment definitions from `source`.
    ///
    /// # Errors
    ///
    /// - [`FlattenError::Parse`] on unbalanced/mismatched delimiters or a
    ///   top-level construct that is neither an operation nor a fragment
    ///   definition.
    /// - [`FlattenError::DuplicateFragment`] when two definitions share a
    ///   name.
    pub fn extract(source: &'src str) -> Result<ExtractedDocument<'src>, FlattenError> {
        let mut extractor = Self {
            source,
            scanner: DocumentScanner::new(source),
        };
        extractor.run()
    }

    fn run(&mut self) -> Result<ExtractedDocument<'src>, FlattenError> {
        let mut fragments: IndexMap<String, FragmentDefinition<'src>> = IndexMap::new();
        let mut operation_spans: Vec<ByteSpan> = vec![];

        loop {
            self.scanner.skip_ignored();
            if self.scanner.is_at_end() {
                break;
            }

            let start_offset = self.scanner.curr_byte_offset();
            let start_position = self.scanner.curr_position();

            match self.scanner.peek_char() {
                // Anonymous operation shorthand: a bare selection set.
                Some('{') => {
                    self.scanner.skip_balanced()?;
                    operation_spans.push(ByteSpan::new(
                        start_offset,
                        self.scanner.curr_byte_offset(),
                    ));
                }

                Some(ch) if is_name_start(ch) => {
                    let Some(keyword) = self.scanner.read_name() else {
                        // Unreachable: peek_char just matched a name start.
                        return Err(self.parse_error_here(format!(
                            "expected a name, found `{ch}`"
                        )));
                    };
                    match keyword {
                        "fragment" => {
                            let definition = self
                                .parse_fragment_definition(start_offset, start_position)?;
                            if fragments.contains_key(definition.name()) {
                                return Err(FlattenError::DuplicateFragment {
                                    name: definition.name().to_string(),
                                });
                            }
                            fragments.insert(definition.name().to_string(), definition);
                        }
                        "query" | "mutation" | "subscription" => {
                            self.scan_operation_definition(keyword)?;
                            operation_spans.push(ByteSpan::new(
                                start_offset,
                                self.scanner.curr_byte_offset(),
                            ));
                        }
                        other => {
                            return Err(FlattenError::Parse {
                                message: format!(
                                    "unexpected top-level `{other}`; expected an \
                                     operation or a fragment definition"
                                ),
                                position: start_position,
                            });
                        }
                    }
                }

                Some(ch) => {
                    return Err(FlattenError::Parse {
                        message: format!("unexpected `{ch}` at the top level"),
                        position: start_position,
                    });
                }

                None => break,
            }
        }

        let operation_text = operation_spans
            .iter()
            .map(|span| span.slice(self.source))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(ExtractedDocument::new(operation_text, fragments))
    }

    /// Parses the remainder of a fragment definition. The `fragment`
    /// keyword has already been consumed.
    fn parse_fragment_definition(
        &mut self,
        start_offset: usize,
        start_position: SourcePosition,
    ) -> Result<FragmentDefinition<'src>, FlattenError> {
        self.scanner.skip_ignored();
        let name_position = self.scanner.curr_position();
        let Some(name) = self.scanner.read_name() else {
            return Err(FlattenError::Parse {
                message: "expected a fragment name after `fragment`".to_string(),
                position: name_position,
            });
        };
        if name == "on" {
            // `on` introduces type conditions and cannot name a fragment.
            return Err(FlattenError::Parse {
                message: "fragment name cannot be `on`".to_string(),
                position: name_position,
            });
        }

        self.scanner.skip_ignored();
        let on_position = self.scanner.curr_position();
        if self.scanner.read_name() != Some("on") {
            return Err(FlattenError::Parse {
                message: format!("expected `on` after fragment name `{name}`"),
                position: on_position,
            });
        }

        self.scanner.skip_ignored();
        let type_position = self.scanner.curr_position();
        let Some(type_condition) = self.scanner.read_name() else {
            return Err(FlattenError::Parse {
                message: format!("expected a type condition after `on` in fragment `{name}`"),
                position: type_position,
            });
        };

        // Optional directives between the type condition and the body.
        loop {
            self.scanner.skip_ignored();
            match self.scanner.peek_char() {
                Some('@') => self.scan_directive()?,
                Some('{') => break,
                _ => {
                    return Err(self.parse_error_here(format!(
                        "expected `{{` to open the body of fragment `{name}`"
                    )));
                }
            }
        }

        let body_open_offset = self.scanner.curr_byte_offset();
        self.scanner.skip_balanced()?;
        let end_offset = self.scanner.curr_byte_offset();
        let body = &self.source[body_open_offset + 1..end_offset - 1];

        Ok(FragmentDefinition::new(
            name,
            type_condition,
            body,
            ByteSpan::new(start_offset, end_offset),
            start_position,
        ))
    }

    /// Scans past the remainder of a named operation definition: optional
    /// operation name, optional variable definitions (whose default values
    /// may contain nested braces), optional directives, then the selection
    /// set.
    fn scan_operation_definition(&mut self, keyword: &str) -> Result<(), FlattenError> {
        loop {
            self.scanner.skip_ignored();
            match self.scanner.peek_char() {
                Some('{') => {
                    self.scanner.skip_balanced()?;
                    return Ok(());
                }
                Some('(') => self.scanner.skip_balanced()?,
                Some('@') => self.scan_directive()?,
                Some(ch) if is_name_start(ch) => {
                    // The operation's (optional) name.
                    self.scanner.read_name();
                }
                Some(ch) => {
                    return Err(self.parse_error_here(format!(
                        "unexpected `{ch}` in `{keyword}` operation definition"
                    )));
                }
                None => {
                    return Err(self.parse_error_here(format!(
                        "unexpected end of input in `{keyword}` operation definition"
                    )));
                }
            }
        }
    }

    /// Scans past a `@name` directive and its optional `(…)` arguments.
    /// The caller must have peeked a `@`.
    fn scan_directive(&mut self) -> Result<(), FlattenError> {
        self.scanner.consume();
        if self.scanner.read_name().is_none() {
            return Err(self.parse_error_here("expected a directive name after `@`".to_string()));
        }
        self.scanner.skip_ignored();
        if self.scanner.peek_char() == Some('(') {
            self.scanner.skip_balanced()?;
        }
        Ok(())
    }

    fn parse_error_here(&self, message: String) -> FlattenError {
        FlattenError::Parse {
            message,
            position: self.scanner.curr_position(),
        }
    }
}

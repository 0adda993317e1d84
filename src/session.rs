use crate::{
    error::Error,
    interpreter::{
        environment::Environment, evaluator::interpret, lexer::tokenize, parser::parse,
        value::core::Value,
    },
};

/// The outcome of one line of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOutcome {
    /// 1-based line number.
    pub line:   usize,
    /// The produced value, `None` for a blank line, or the error that
    /// aborted the line.
    pub result: Result<Option<Value>, Error>,
}

/// A long-lived evaluation session.
///
/// Every line is tokenized, parsed and interpreted on its own against one
/// shared [`Environment`], so definitions carry over from line to line.
#[derive(Debug, Default)]
pub struct Session {
    env: Environment,
}

impl Session {
    /// Creates a session with a fresh environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The environment statements are evaluated against.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// Executes one line as a single statement.
    ///
    /// # Returns
    /// - `Ok(Some(value))`: The statement's value.
    /// - `Ok(None)`: The line is blank; nothing was evaluated.
    ///
    /// # Errors
    /// Returns the lex, parse or runtime error that aborted the statement.
    /// Mutations made before a runtime error are kept.
    ///
    /// # Example
    /// ```
    /// use umni::{Session, interpreter::value::core::Value};
    ///
    /// let mut session = Session::new();
    /// session.execute_line("fn double(x) = x * 2").unwrap();
    /// assert_eq!(session.execute_line("double(21)").unwrap(), Some(Value::Natural(42)));
    /// assert_eq!(session.execute_line("   ").unwrap(), None);
    /// ```
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Value>, Error> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let tokens = tokenize(line)?;
        let ast = parse(&tokens)?;
        log::debug!("evaluating {line:?}");
        let value = interpret(&ast, &mut self.env)?;
        Ok(Some(value))
    }

    /// Executes every line of `text` in order.
    ///
    /// A failing line records its error and execution continues with the
    /// next line.
    pub fn execute_document(&mut self, text: &str) -> Vec<LineOutcome> {
        text.lines()
            .enumerate()
            .map(|(index, line)| LineOutcome { line:   index + 1,
                                               result: self.execute_line(line), })
            .collect()
    }

    /// Executes `text` and renders one display string per line.
    ///
    /// Blank and failed lines render as empty strings.
    ///
    /// # Example
    /// ```
    /// use umni::Session;
    ///
    /// let mut session = Session::new();
    /// let shown = session.render_document("d = 1500m\n\nd to km\nd / 0");
    /// assert_eq!(shown, ["1,500m", "", "1.5km", ""]);
    /// ```
    pub fn render_document(&mut self, text: &str) -> Vec<String> {
        self.execute_document(text)
            .into_iter()
            .map(|outcome| match outcome.result {
                Ok(Some(value)) => value.render(),
                Ok(None) | Err(_) => String::new(),
            })
            .collect()
    }
}

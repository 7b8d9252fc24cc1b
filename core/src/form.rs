//! Form descriptors supplied by the host at session start.

/// A host-owned input slot that receives translated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<H> {
    pub name: String,
    pub description: Option<String>,
    /// Opaque handle to the host's input target.
    pub target: H,
}

impl<H> Field<H> {
    pub fn new(name: impl Into<String>, target: H) -> Self {
        Self {
            name: name.into(),
            description: None,
            target,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A host button, carried for wiring the submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button<H> {
    pub name: String,
    pub description: Option<String>,
    pub target: H,
}

impl<H> Button<H> {
    pub fn new(name: impl Into<String>, target: H) -> Self {
        Self {
            name: name.into(),
            description: None,
            target,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Ordered fields and buttons of one form. Immutable once a session opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form<H> {
    fields: Vec<Field<H>>,
    buttons: Vec<Button<H>>,
}

impl<H> Form<H> {
    pub fn new(fields: Vec<Field<H>>) -> Self {
        Self {
            fields,
            buttons: Vec::new(),
        }
    }

    /// A form with no fields. Text can still be entered and read back, but
    /// nothing is pushed to the host.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn with_buttons(mut self, buttons: Vec<Button<H>>) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn fields(&self) -> &[Field<H>] {
        &self.fields
    }

    pub fn buttons(&self) -> &[Button<H>] {
        &self.buttons
    }

    pub fn field(&self, index: usize) -> Option<&Field<H>> {
        self.fields.get(index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

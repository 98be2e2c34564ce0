use utoipa::IntoParams;

/// Query string of `GET /write`.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WriteParams {
    /// Text that replaces the stored content. Required and non-empty.
    /// When repeated, only the first value counts.
    pub msg: Option<String>,
}

impl WriteParams {
    /// Builds params from decoded query pairs; the first `msg` wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let msg = pairs
            .into_iter()
            .find(|(key, _)| key == "msg")
            .map(|(_, value)| value);
        Self { msg }
    }

    /// The message, or `None` when absent or empty.
    pub fn message(self) -> Option<String> {
        self.msg.filter(|m| !m.is_empty())
    }
}

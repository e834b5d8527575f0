use crate::config::ModelConfig;

/// Build the echo reply for one model: the uppercased identifier, the
/// caller's message verbatim, and the model's note on a second line
/// when it has one.
pub fn generate_reply(model: &ModelConfig, message: &str) -> String {
    let mut reply = format!(
        "[{}]: I received your message: '{}'",
        model.name.to_uppercase(),
        message
    );

    if let Some(note) = model.note {
        reply.push('\n');
        reply.push_str(note);
    }

    reply
}

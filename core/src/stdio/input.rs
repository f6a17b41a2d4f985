use encoding_rs::Encoding;
use std::io::Read;

/// Environment variable naming an explicit stdin encoding label.
pub const STDIN_ENCODING_ENV: &str = "APPROVAL_GATE_STDIN_ENCODING";

pub fn read_stdin_text() -> Result<String, std::io::Error> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(decode_stdin_bytes(&buf))
}

pub fn decode_stdin_bytes(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    if let Ok(label) = std::env::var(STDIN_ENCODING_ENV) {
        if let Some(enc) = Encoding::for_label(label.as_bytes()) {
            tracing::debug!(
                target: "gate.stdin",
                "Using {}: {}, bytes: {}",
                STDIN_ENCODING_ENV,
                label,
                bytes.len()
            );
            let (cow, _, _) = enc.decode(bytes);
            return cow.into_owned();
        }
    }

    if let Some((enc, bom_len)) = Encoding::for_bom(bytes) {
        tracing::debug!(
            target: "gate.stdin",
            "Detected BOM encoding: {}, bytes: {}",
            enc.name(),
            bytes.len()
        );
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        return cow.into_owned();
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            tracing::debug!(target: "gate.stdin", "Using UTF-8 lossy conversion, bytes: {}", bytes.len());
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

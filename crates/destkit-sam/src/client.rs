//! The generation state machine: connect, hello, generate, parse.

use std::io;

use tokio::io::{
    AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader, Take,
};
use tokio::net::TcpStream;
use tracing::{debug, warn};

use destkit_core::{Destination, KeyPair};

use crate::config::SamConfig;
use crate::error::SamError;

/// Upper bound on a single response line, newline included.
pub const MAX_RESPONSE_SIZE: u64 = 4096;

/// Bounds on each parsed key segment, in characters.
const MIN_KEY_SEGMENT: usize = 128;
const MAX_KEY_SEGMENT: usize = 4096;

const CMD_HELLO: &str = "HELLO VERSION MIN=3.1 MAX=3.1\n";
const RESPONSE_OK: &str = "RESULT=OK";
const PUB_MARKER: &str = "PUB=";
const PRIV_MARKER: &str = "PRIV=";

/// Client for the SAM bridge's destination-generation exchange.
///
/// Each [`SamClient::generate_destination`] call runs the whole state
/// machine on its own connection; a client is freely shared between
/// concurrent callers.
#[derive(Clone, Debug, Default)]
pub struct SamClient {
    config: SamConfig,
}

impl SamClient {
    pub fn new(config: SamConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SamConfig {
        &self.config
    }

    /// Generate a fresh destination keypair.
    ///
    /// Connects, performs the version handshake, requests generation,
    /// and parses the response. One deadline covers all of it; the
    /// connection is dropped on every exit path. Nothing is retried.
    pub async fn generate_destination(&self) -> Result<KeyPair, SamError> {
        match tokio::time::timeout(self.config.timeout, self.run()).await {
            Ok(result) => result,
            Err(_) => {
                warn!(addr = %self.config.addr, "SAM generation attempt timed out");
                Err(SamError::Timeout)
            }
        }
    }

    async fn run(&self) -> Result<KeyPair, SamError> {
        debug!(addr = %self.config.addr, "connecting to SAM bridge");
        let stream = TcpStream::connect(&self.config.addr)
            .await
            .map_err(SamError::Connect)?;
        let (read_half, mut write_half) = stream.into_split();
        let mut reader = BufReader::new(read_half.take(MAX_RESPONSE_SIZE));

        self.handshake(&mut reader, &mut write_half).await?;
        self.generate(&mut reader, &mut write_half).await
    }

    async fn handshake<R, W>(
        &self,
        reader: &mut BufReader<Take<R>>,
        writer: &mut W,
    ) -> Result<(), SamError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        write_command(writer, CMD_HELLO).await?;
        let response = read_response(reader).await?;
        if !response.contains(RESPONSE_OK) {
            warn!(response = %response, "SAM handshake rejected");
            return Err(SamError::Handshake(response));
        }
        debug!("SAM handshake accepted");
        Ok(())
    }

    async fn generate<R, W>(
        &self,
        reader: &mut BufReader<Take<R>>,
        writer: &mut W,
    ) -> Result<KeyPair, SamError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let cmd = format!(
            "DEST GENERATE SIGNATURE_TYPE={}\n",
            self.config.signature_type.code()
        );
        write_command(writer, &cmd).await?;
        let response = read_response(reader).await?;

        let (pub_text, priv_text) = parse_key_response(&response)?;
        check_segment("public", &pub_text)?;
        check_segment("private", &priv_text)?;
        debug!(
            pub_len = pub_text.len(),
            priv_len = priv_text.len(),
            "generated destination keypair"
        );

        let both = format!("{pub_text}{priv_text}");
        Ok(KeyPair::new(Destination::unchecked(pub_text), both))
    }
}

async fn write_command<W: AsyncWrite + Unpin>(writer: &mut W, cmd: &str) -> Result<(), SamError> {
    writer
        .write_all(cmd.as_bytes())
        .await
        .map_err(SamError::Write)
}

/// Read one newline-terminated line, capped at [`MAX_RESPONSE_SIZE`]
/// bytes. A full cap with no newline is an explicit error rather than an
/// unbounded buffer.
async fn read_response<R: AsyncRead + Unpin>(
    reader: &mut BufReader<Take<R>>,
) -> Result<String, SamError> {
    reader.get_mut().set_limit(MAX_RESPONSE_SIZE);
    let mut line = String::new();
    let n = reader.read_line(&mut line).await.map_err(SamError::Read)?;
    if n == 0 {
        return Err(SamError::Read(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "bridge closed the connection",
        )));
    }
    if !line.ends_with('\n') {
        if line.len() as u64 >= MAX_RESPONSE_SIZE {
            return Err(SamError::ResponseTooLarge);
        }
        return Err(SamError::Read(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "connection closed mid-line",
        )));
    }
    // Bytes buffered under the previous limit carry over into this line,
    // so the cap is enforced on the finished line as well.
    if line.len() as u64 > MAX_RESPONSE_SIZE {
        return Err(SamError::ResponseTooLarge);
    }
    Ok(line.trim().to_owned())
}

/// Split a `...PUB=<pub>PRIV=<priv>` line into its two segments. Each
/// marker must occur exactly once, `PRIV=` after the `PUB=` segment.
fn parse_key_response(response: &str) -> Result<(String, String), SamError> {
    let (prefix, priv_part) = response
        .split_once(PRIV_MARKER)
        .ok_or(SamError::Parse("missing PRIV= marker"))?;
    if priv_part.contains(PRIV_MARKER) {
        return Err(SamError::Parse("more than one PRIV= marker"));
    }
    let (_, pub_part) = prefix
        .split_once(PUB_MARKER)
        .ok_or(SamError::Parse("missing PUB= marker"))?;
    if pub_part.contains(PUB_MARKER) {
        return Err(SamError::Parse("more than one PUB= marker"));
    }
    Ok((clean_segment(pub_part), clean_segment(priv_part)))
}

/// Trim surrounding whitespace and drop embedded newlines; the bridge is
/// known to emit a stray newline inside the private segment.
fn clean_segment(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect()
}

fn check_segment(which: &'static str, text: &str) -> Result<(), SamError> {
    if text.is_empty() || text.len() < MIN_KEY_SEGMENT || text.len() > MAX_KEY_SEGMENT {
        return Err(SamError::InvalidKeyResponse {
            which,
            len: text.len(),
        });
    }
    Ok(())
}

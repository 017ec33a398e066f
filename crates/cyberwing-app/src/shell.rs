//! Terminal front end: line input, typed-out replies.

use std::time::Duration;

use cyberwing_chat::{DialogueEngine, Reply};
use cyberwing_core::config::ShellConfig;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const BANNER: &str = "\
╔════════════════════════════════════════════════════╗
║   YOUR PASSWORD SUCKS, BUT THAT'S FINE             ║
║   I'm your Cybersecurity Wingman                   ║
╚════════════════════════════════════════════════════╝";

pub const GOODBYE: &str = "Goodbye! 👋 Stay safe out there.";

const USER_PROMPT: &str = "You: ";
const BOT_PREFIX: &str = "Bot: ";

pub struct Shell {
    engine: DialogueEngine,
    typing_delay: Duration,
    show_banner: bool,
}

impl Shell {
    pub fn new(engine: DialogueEngine, config: &ShellConfig) -> Self {
        Self {
            engine,
            typing_delay: Duration::from_millis(config.typing_delay_ms),
            show_banner: config.show_banner,
        }
    }

    /// Run the conversation until the user quits or input ends.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if self.show_banner {
            out.write_all(BANNER.as_bytes()).await?;
            out.write_all(b"\n\n").await?;
        }
        let opening = self.engine.start_conversation();
        self.say(out, opening).await?;

        let mut lines = input.lines();
        loop {
            out.write_all(USER_PROMPT.as_bytes()).await?;
            out.flush().await?;

            let Some(line) = lines.next_line().await? else {
                tracing::debug!("Input closed");
                out.write_all(b"\n").await?;
                return self.say(out, GOODBYE).await;
            };
            if line.trim().is_empty() {
                continue;
            }

            match self.engine.process_input(&line) {
                Reply::Text(text) => self.say(out, &text).await?,
                Reply::Terminate => return self.say(out, GOODBYE).await,
            }
        }
    }

    async fn say<W: AsyncWrite + Unpin>(&self, out: &mut W, text: &str) -> io::Result<()> {
        out.write_all(BOT_PREFIX.as_bytes()).await?;
        reveal(out, text, self.typing_delay).await?;
        out.write_all(b"\n\n").await?;
        out.flush().await
    }

    #[cfg(test)]
    pub fn engine(&self) -> &DialogueEngine {
        &self.engine
    }
}

/// Write `text` one character at a time, pausing `delay` between characters.
/// A zero delay writes it in one go.
pub async fn reveal<W: AsyncWrite + Unpin>(out: &mut W, text: &str, delay: Duration) -> io::Result<()> {
    if delay.is_zero() {
        return out.write_all(text.as_bytes()).await;
    }

    let mut buf = [0u8; 4];
    for ch in text.chars() {
        out.write_all(ch.encode_utf8(&mut buf).as_bytes()).await?;
        out.flush().await?;
        tokio::time::sleep(delay).await;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyberwing_core::CyberwingConfig;

    fn shell(show_banner: bool) -> Shell {
        let mut config = CyberwingConfig::default();
        config.dialogue.seed = Some(3);
        config.shell.typing_delay_ms = 0;
        config.shell.show_banner = show_banner;
        let engine = DialogueEngine::from_config(&config).unwrap();
        Shell::new(engine, &config.shell)
    }

    async fn run_script(shell: &mut Shell, script: &str) -> String {
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_conversation_until_quit() {
        let mut shell = shell(true);
        let transcript = run_script(&mut shell, "sam\n\nhelp\nbye\nvpn\n").await;

        assert!(transcript.starts_with(BANNER));
        assert!(transcript.contains("Bot: 👋 Hello! Welcome to CyberSecurityBot."));
        assert!(transcript.contains("Bot: Nice to meet you, Sam!"));
        assert!(transcript.ends_with(&format!("Bot: {}\n\n", GOODBYE)));
        // Nothing after quitting is processed.
        assert!(shell.engine().session().current_topic().is_none());
    }

    #[tokio::test]
    async fn test_end_of_input_says_goodbye() {
        let mut shell = shell(false);
        let transcript = run_script(&mut shell, "sam\n").await;
        assert!(!transcript.contains("YOUR PASSWORD SUCKS"));
        assert!(transcript.ends_with(&format!("Bot: {}\n\n", GOODBYE)));
        assert!(shell.engine().has_user_name());
    }

    #[tokio::test]
    async fn test_blank_lines_are_skipped() {
        let mut shell = shell(false);
        run_script(&mut shell, "\n   \nsam\n").await;
        assert_eq!(shell.engine().session().user_name(), "Sam");
    }

    #[tokio::test]
    async fn test_reveal_writes_every_character() {
        let mut out = Vec::new();
        reveal(&mut out, "héllo 🔐", Duration::from_millis(1)).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "héllo 🔐");
    }

    #[tokio::test]
    async fn test_reveal_without_delay() {
        let mut out = Vec::new();
        reveal(&mut out, "instant", Duration::ZERO).await.unwrap();
        assert_eq!(out, b"instant");
    }
}

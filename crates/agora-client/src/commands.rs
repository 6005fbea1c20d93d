//! Shell commands.
//!
//! Each line typed into the shell parses into a [`Command`], which
//! [`dispatch`] applies to the [`AppState`] through a [`MemoryHost`].

use std::path::PathBuf;

use agora_shared::share::{ShareAction, ShareTarget};
use agora_shared::{PostId, Result};

use crate::host::MemoryHost;
use crate::render::render_text;
use crate::state::AppState;

pub const HELP: &str = "\
commands:
  show                       render the feed
  json                       dump the feed view as JSON
  write <text>               set the draft post text
  attach <path>              stage an image file
  detach                     remove the staged image
  post                       publish the draft
  like <id>                  toggle like on a post
  comments <id>              show/hide a post's comments
  comment <id> <text>        comment on a post
  share <id> <target>        facebook | twitter | instagram | copy
  clipboard                  print the clipboard
  help                       this text
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Json,
    Write(String),
    Attach(PathBuf),
    Detach,
    Post,
    Like(PostId),
    Comments(PostId),
    Comment(PostId, String),
    Share(PostId, ShareTarget),
    Clipboard,
    Help,
    Quit,
}

impl std::str::FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let cmd = match verb {
            "show" | "" => Command::Show,
            "json" => Command::Json,
            "write" => Command::Write(rest.to_string()),
            "attach" if !rest.is_empty() => Command::Attach(PathBuf::from(rest)),
            "attach" => return Err("usage: attach <path>".into()),
            "detach" => Command::Detach,
            "post" => Command::Post,
            "like" => Command::Like(parse_id(rest)?),
            "comments" => Command::Comments(parse_id(rest)?),
            "comment" => {
                let (id, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Command::Comment(parse_id(id)?, text.to_string())
            }
            "share" => {
                let (id, target) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| "usage: share <id> <target>".to_string())?;
                Command::Share(parse_id(id)?, target.parse()?)
            }
            "clipboard" => Command::Clipboard,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command: {other} (try `help`)")),
        };
        Ok(cmd)
    }
}

fn parse_id(s: &str) -> std::result::Result<PostId, String> {
    s.parse().map_err(|_| format!("invalid post id: {s:?}"))
}

#[derive(Debug)]
pub enum Outcome {
    Output(String),
    Quit,
}

pub async fn dispatch(state: &mut AppState, host: &mut MemoryHost, cmd: Command) -> Result<Outcome> {
    let out = match cmd {
        Command::Show => render_text(&state.page()),
        Command::Json => serde_json::to_string_pretty(&state.page())?,
        Command::Write(text) => {
            state.composer.set_text(text);
            String::new()
        }
        Command::Attach(path) => {
            state.attach_image(&path, host).await?;
            format!("attached {}", path.display())
        }
        Command::Detach => {
            state.composer.clear_image();
            String::new()
        }
        Command::Post => {
            let id = state.submit_post(host)?;
            format!("posted #{id}")
        }
        Command::Like(id) => {
            let likes = state.toggle_like(id)?;
            let liked = state.card(id)?.is_liked();
            format!("#{id}: {} {likes}", if liked { "♥" } else { "♡" })
        }
        Command::Comments(id) => {
            let open = state.toggle_comments(id)?;
            format!("#{id}: comments {}", if open { "shown" } else { "hidden" })
        }
        Command::Comment(id, text) => match state.add_comment(id, &text)? {
            Some(_) => format!("#{id}: {} comments", state.card(id)?.comments().len()),
            None => String::new(),
        },
        Command::Share(id, target) => match state.share(id, target, host)? {
            ShareAction::OpenWindow { url, .. } => format!("opened {url}"),
            ShareAction::Unsupported | ShareAction::CopyToClipboard(_) => String::new(),
        },
        Command::Clipboard => host.clipboard().unwrap_or("(empty)").to_string(),
        Command::Help => HELP.to_string(),
        Command::Quit => return Ok(Outcome::Quit),
    };
    Ok(Outcome::Output(out))
}

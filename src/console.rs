//! Console commands
//!
//! One command per line; each maps to the events a browser would deliver.

use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use bankdesk_app::{Button, Event, Form};
use bankdesk_core::page::{LOGIN_PASSWORD, LOGIN_USERNAME};
use bankdesk_core::ViewId;

pub const HELP: &str = "commands:
  login <user> <password>   log in
  logout                    log out
  tab <view>                open dashboard|accounts|transactions|transfer|reports
  type <field> <value...>   set an input (e.g. type depositAmount 50)
  submit <form>             submit createAccount|deposit|withdrawal|transfer
  click <button>            click account_summary|daily_summary
  show                      print the page
  wait <ms>                 let timers and searches run
  quit                      exit";

#[derive(Debug)]
pub enum Command {
    Events(Vec<Event>),
    Show,
    Wait(Duration),
    Help,
    Quit,
    Nothing,
}

fn input(field: &str, value: impl Into<String>) -> Event {
    Event::Input {
        field: field.to_string(),
        value: value.into(),
    }
}

pub fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Nothing);
    };
    let args: Vec<&str> = words.collect();

    let command = match (verb, args.as_slice()) {
        ("login", [user, password]) => Command::Events(vec![
            input(LOGIN_USERNAME, *user),
            input(LOGIN_PASSWORD, *password),
            Event::Login,
        ]),
        ("logout", []) => Command::Events(vec![Event::Logout]),
        ("tab", [view]) => Command::Events(vec![Event::TabClicked(view.parse::<ViewId>()?)]),
        ("type", [field, value @ ..]) => Command::Events(vec![input(field, value.join(" "))]),
        ("submit", [form]) => {
            let form = Form::parse(form).ok_or_else(|| anyhow!("unknown form '{}'", form))?;
            Command::Events(vec![Event::Submit(form)])
        }
        ("click", [button]) => {
            let button = Button::parse(button).ok_or_else(|| anyhow!("unknown button '{}'", button))?;
            Command::Events(vec![Event::Click(button)])
        }
        ("show", []) => Command::Show,
        ("wait", [ms]) => Command::Wait(Duration::from_millis(ms.parse()?)),
        ("help", _) => Command::Help,
        ("quit" | "exit", []) => Command::Quit,
        _ => bail!("cannot parse '{}', try 'help'", line.trim()),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_expands_to_three_events() {
        let Command::Events(events) = parse_command("login admin secret").unwrap() else {
            panic!("expected events");
        };
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], Event::Input { field, value } if field == "loginUsername" && value == "admin"));
        assert!(matches!(&events[1], Event::Input { field, value } if field == "loginPassword" && value == "secret"));
        assert!(matches!(events[2], Event::Login));
    }

    #[test]
    fn test_type_keeps_spaces() {
        let Command::Events(events) = parse_command("type transferNote rent for may").unwrap() else {
            panic!("expected events");
        };
        assert!(matches!(&events[0], Event::Input { value, .. } if value == "rent for may"));
    }

    #[test]
    fn test_type_empty_value_clears() {
        let Command::Events(events) = parse_command("type searchAccountInput").unwrap() else {
            panic!("expected events");
        };
        assert!(matches!(&events[0], Event::Input { value, .. } if value.is_empty()));
    }

    #[test]
    fn test_simple_commands() {
        assert!(matches!(parse_command("tab reports").unwrap(), Command::Events(e) if matches!(e[0], Event::TabClicked(ViewId::Reports))));
        assert!(matches!(parse_command("submit deposit").unwrap(), Command::Events(e) if matches!(e[0], Event::Submit(Form::Deposit))));
        assert!(matches!(parse_command("click daily").unwrap(), Command::Events(e) if matches!(e[0], Event::Click(Button::DailySummary))));
        assert!(matches!(parse_command("wait 350").unwrap(), Command::Wait(d) if d == Duration::from_millis(350)));
        assert!(matches!(parse_command("   ").unwrap(), Command::Nothing));
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn test_errors() {
        assert!(parse_command("tab settings").is_err());
        assert!(parse_command("submit loginForm").is_err());
        assert!(parse_command("wait soon").is_err());
        assert!(parse_command("login onlyuser").is_err());
    }
}

//! Line commands for driving the client from a terminal.
//!
//! Each input line becomes one [`Command`]. Most commands expand to the
//! sequence of pointer and component events a click or drag would produce,
//! so the console exercises exactly the same handler paths as any other
//! front end.
//!
//! # Example
//!
//! ```rust
//! use brewlog::console::{parse, Command};
//! use brewlog::{AppState, Event, Theme};
//!
//! let state = AppState::new(Theme::default());
//! let command = parse("add", &state)?;
//! assert_eq!(command, Command::Events(vec![Event::OpenForm]));
//! # Ok::<(), brewlog::BrewlogError>(())
//! ```

use crate::app::modes::Overlay;
use crate::app::{AppState, Event};
use crate::components::{
    DialogClick, FormEvent, FormField, HitTarget, ItemEvent, PickerEvent, Region, SearchEvent,
};
use crate::domain::{self, BrewTime, BrewlogError, Result};

/// Command reference printed by `help`.
pub const HELP: &str = "\
list
  reload                     fetch brews from the server
  search <text>              filter by bean, method, or details
  clear                      clear the search
  swipe <id> <from> <to>     drag an entry from x=<from> to x=<to> and release
  drag <id> <from> <to>      drag without releasing
  release <id>               release a drag
  trash <id>                 open the delete confirmation
  edit <id> <field> <value>  change one field (bean image method temp in out time bloom details)
dialog
  confirm | cancel           answer the delete confirmation
  backdrop                   click outside the dialog or form
  dialog                     click inside the dialog
form
  add                        open the add-brew form
  set <field> <value>        bean image custom temp in out bloom details
  method <name>              V60, Chemex, ..., Other
  time | min <m> | sec <s> | done
  submit | cancel
other
  click                      click on empty space
  show                       redraw
  help | quit";

/// What the caller should do with an input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Dispatch these events in order.
    Events(Vec<Event>),
    /// Redraw without changing anything.
    Show,
    /// Print [`HELP`].
    Help,
}

fn invalid(message: impl Into<String>) -> BrewlogError {
    BrewlogError::InvalidCommand(message.into())
}

fn number<T: std::str::FromStr>(raw: Option<&str>, what: &str) -> Result<T> {
    let raw = raw.ok_or_else(|| invalid(format!("missing {what}")))?;
    raw.parse().map_err(|_| invalid(format!("{what} must be a number, got {raw:?}")))
}

fn measure(raw: &str, what: &str) -> Result<f64> {
    domain::parse_measure(raw)
        .ok_or_else(|| invalid(format!("{what} must be a finite number, got {raw:?}")))
}

/// Splits off the first whitespace-delimited word.
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    text.split_once(char::is_whitespace)
        .map_or((text, ""), |(word, rest)| (word, rest.trim()))
}

fn item(id: i64, event: ItemEvent) -> Event {
    Event::Item { id, event }
}

fn press_item(id: i64) -> Event {
    Event::PointerDown(HitTarget::Inside(Region::BrewItem(id)))
}

fn picker(event: PickerEvent) -> Vec<Event> {
    vec![
        Event::PointerDown(HitTarget::Inside(Region::TimePicker)),
        Event::Form(FormEvent::Picker(event)),
    ]
}

/// Parses one input line against the current state.
///
/// Blank lines redraw.
///
/// # Errors
///
/// Returns [`BrewlogError::InvalidCommand`] for unknown commands, missing or
/// malformed arguments, and commands that need an overlay that is not open.
pub fn parse(line: &str, state: &AppState) -> Result<Command> {
    let (name, rest) = split_word(line);
    let mut args = rest.split_whitespace();
    let overlay = state.overlay();

    let events = match name {
        "" | "show" => return Ok(Command::Show),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => vec![Event::Quit],
        "reload" | "load" => vec![Event::Load],
        "search" => vec![Event::Search(SearchEvent::Input(rest.to_string()))],
        "clear" => vec![Event::Search(SearchEvent::Clear)],
        "add" => vec![Event::OpenForm],
        "swipe" | "drag" => {
            let id = number(args.next(), "brew id")?;
            let from = number(args.next(), "start x")?;
            let to = number(args.next(), "end x")?;
            let mut events = vec![
                press_item(id),
                item(id, ItemEvent::SwipeStart(from)),
                item(id, ItemEvent::SwipeMove(to)),
            ];
            if name == "swipe" {
                events.push(item(id, ItemEvent::SwipeEnd));
            }
            events
        }
        "release" => vec![item(number(args.next(), "brew id")?, ItemEvent::SwipeEnd)],
        "trash" => {
            let id = number(args.next(), "brew id")?;
            vec![press_item(id), item(id, ItemEvent::TrashClicked)]
        }
        "edit" => vec![parse_edit(rest, state)?],
        "confirm" | "dialog" => {
            let Overlay::DeleteConfirm { id } = overlay else {
                return Err(invalid("no delete confirmation is open"));
            };
            let click = if name == "confirm" { DialogClick::Confirm } else { DialogClick::Content };
            vec![item(id, ItemEvent::Dialog(click))]
        }
        "cancel" | "backdrop" => match overlay {
            Overlay::DeleteConfirm { id } => {
                let click = if name == "cancel" { DialogClick::Cancel } else { DialogClick::Backdrop };
                vec![item(id, ItemEvent::Dialog(click))]
            }
            Overlay::AddForm => {
                let event = if name == "cancel" { FormEvent::Cancel } else { FormEvent::BackdropClick };
                vec![Event::Form(event)]
            }
            Overlay::None => return Err(invalid("nothing to close")),
        },
        "set" => {
            let (key, value) = split_word(rest);
            let field = FormField::from_key(key)
                .ok_or_else(|| invalid(format!("unknown form field {key:?}")))?;
            vec![Event::Form(FormEvent::Input { field, value: value.to_string() })]
        }
        "method" => {
            if rest.is_empty() {
                return Err(invalid("missing method name"));
            }
            vec![Event::Form(FormEvent::SelectMethod(rest.to_string()))]
        }
        "time" => picker(PickerEvent::FieldClicked),
        "min" => picker(PickerEvent::SetMinute(number(args.next(), "minutes")?)),
        "sec" => picker(PickerEvent::SetSecond(number(args.next(), "seconds")?)),
        "done" => picker(PickerEvent::Done),
        "submit" => vec![Event::Form(FormEvent::Submit)],
        "click" => vec![Event::PointerDown(HitTarget::Elsewhere)],
        other => return Err(invalid(format!("unknown command {other:?}, try help"))),
    };

    Ok(Command::Events(events))
}

/// `edit <id> <field> <value>`: the full brew with one field replaced.
fn parse_edit(rest: &str, state: &AppState) -> Result<Event> {
    let (id, rest) = split_word(rest);
    let id: i64 = number(Some(id), "brew id")?;
    let (field, value) = split_word(rest);

    let brew = state
        .brews
        .iter()
        .find(|brew| brew.id == id)
        .ok_or_else(|| invalid(format!("no brew with id {id}")))?;
    let mut update = brew.to_new();

    let optional = |value: &str| (!value.is_empty()).then(|| value.to_string());
    match field {
        "bean" if !value.is_empty() => update.bean_type = value.to_string(),
        "method" if !value.is_empty() => update.brew_type = value.to_string(),
        "image" => update.image_url = optional(value),
        "details" => update.details = optional(value),
        "temp" => update.water_temp = measure(value, "water temperature")?,
        "in" => update.weight_in = measure(value, "weight in")?,
        "out" => update.weight_out = measure(value, "weight out")?,
        "bloom" => update.bloom_time = number(Some(value), "bloom time")?,
        "time" => update.brew_time = value.parse::<BrewTime>()?.to_mm_ss(),
        "bean" | "method" => return Err(invalid(format!("{field} must not be empty"))),
        other => return Err(invalid(format!("unknown brew field {other:?}"))),
    }

    Ok(Event::UpdateBrew { id, brew: update })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::brew::fixtures::brew;
    use crate::ui::Theme;
    use rstest::rstest;

    fn state() -> AppState {
        let mut state = AppState::new(Theme::default());
        state.brews = vec![brew(3, "Kenya")];
        state.refresh_visible();
        state
    }

    fn events(line: &str, state: &AppState) -> Vec<Event> {
        match parse(line, state).unwrap() {
            Command::Events(events) => events,
            other => panic!("expected events for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn swipe_expands_to_press_and_drag() {
        assert_eq!(
            events("swipe 3 200 100", &state()),
            vec![
                Event::PointerDown(HitTarget::Inside(Region::BrewItem(3))),
                Event::Item { id: 3, event: ItemEvent::SwipeStart(200.0) },
                Event::Item { id: 3, event: ItemEvent::SwipeMove(100.0) },
                Event::Item { id: 3, event: ItemEvent::SwipeEnd },
            ]
        );
        assert_eq!(events("drag 3 200 150", &state()).len(), 3);
    }

    #[test]
    fn search_keeps_whole_rest_of_line() {
        assert_eq!(
            events("search  cold brew ", &state()),
            vec![Event::Search(SearchEvent::Input("cold brew".to_string()))]
        );
    }

    #[test]
    fn set_parses_field_key() {
        assert_eq!(
            events("set bean Ethiopian Yirgacheffe", &state()),
            vec![Event::Form(FormEvent::Input {
                field: FormField::BeanType,
                value: "Ethiopian Yirgacheffe".to_string(),
            })]
        );
    }

    #[test]
    fn cancel_targets_open_overlay() {
        let mut state = state();
        assert!(parse("cancel", &state).is_err());

        state.open_form();
        assert_eq!(events("cancel", &state), vec![Event::Form(FormEvent::Cancel)]);

        state.form = None;
        state.list.handle(3, ItemEvent::TrashClicked);
        assert_eq!(
            events("backdrop", &state),
            vec![Event::Item { id: 3, event: ItemEvent::Dialog(DialogClick::Backdrop) }]
        );
    }

    #[test]
    fn edit_replaces_one_field() {
        let parsed = events("edit 3 time 04:05", &state());
        let [Event::UpdateBrew { id, brew }] = parsed.as_slice() else {
            panic!("expected update, got {parsed:?}");
        };
        assert_eq!(*id, 3);
        assert_eq!(brew.brew_time, "04:05");
        assert_eq!(brew.bean_type, "Kenya");
    }

    #[rstest]
    #[case("brew coffee")]
    #[case("swipe x 1 2")]
    #[case("swipe 3 200")]
    #[case("confirm")]
    #[case("set grind fine")]
    #[case("edit 99 bean Peru")]
    #[case("edit 3 time 75:00")]
    #[case("edit 3 bean")]
    #[case("edit 3 temp NaN")]
    #[case("edit 3 temp inf")]
    #[case("edit 3 out -inf")]
    #[case("min sixty")]
    fn rejects_bad_commands(#[case] line: &str) {
        assert!(parse(line, &state()).is_err());
    }

    #[test]
    fn blank_line_redraws() {
        assert_eq!(parse("   ", &state()).unwrap(), Command::Show);
        assert_eq!(parse("help", &state()).unwrap(), Command::Help);
    }
}

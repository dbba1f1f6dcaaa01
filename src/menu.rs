use crate::console::Console;
use crate::input;
use crate::session::record_session;
use crate::store::{ReportStore, StoreError};
use std::io::{self, BufRead, Write};

/// Top-level dispatcher states. `MainMenu` is both the initial state and the
/// state returned to after a recording or viewing flow completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    Recording,
    Viewing,
    Exited,
}

/// Run the interactive menu loop until the user chooses to exit.
pub fn run<R, W, S>(console: &mut Console<R, W>, store: &S) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    S: ReportStore,
{
    console.say("Welcome to Games Club Statistics Program")?;
    console.say(&"=".repeat(50))?;

    let mut state = MenuState::MainMenu;
    loop {
        state = match state {
            MenuState::MainMenu => main_menu(console)?,
            MenuState::Recording => {
                record_session(console, store)?;
                MenuState::MainMenu
            }
            MenuState::Viewing => {
                view_saved(console, store)?;
                MenuState::MainMenu
            }
            MenuState::Exited => return Ok(()),
        };
    }
}

/// Show the menu block and translate the user's raw choice into the next
/// state. The choice is matched untrimmed; anything but "1"/"2"/"3" stays in
/// the main menu after an acknowledged error message.
fn main_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<MenuState> {
    console.say(&format!("\n{}", "=".repeat(50)))?;
    console.say("GAMES CLUB STATISTICS PROGRAM")?;
    console.say(&"=".repeat(50))?;
    console.say("1. Record Player Scores")?;
    console.say("2. Show Saved Player Stats")?;
    console.say("3. Exit Program")?;
    console.say(&"=".repeat(50))?;

    let choice = console.prompt("What would you like to do? (1-3): ")?;
    match choice.as_str() {
        "1" => Ok(MenuState::Recording),
        "2" => Ok(MenuState::Viewing),
        "3" => {
            console.say("\nThanks for using the Games Club Program!")?;
            console.say("Goodbye!")?;
            Ok(MenuState::Exited)
        }
        _ => {
            console.say("That's not a valid choice. Please pick 1, 2, or 3.")?;
            console.prompt("Press Enter to try again...")?;
            Ok(MenuState::MainMenu)
        }
    }
}

/// Look up and dump a previously saved report verbatim.
fn view_saved<R, W, S>(console: &mut Console<R, W>, store: &S) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    S: ReportStore,
{
    console.say(&format!("\n{}", "=".repeat(50)))?;
    console.say("SHOW SAVED PLAYER STATS")?;
    console.say(&"=".repeat(50))?;

    let player_id = input::prompt_player_id(console)?;

    match store.get(&player_id) {
        Ok(content) => console.say(&format!("\n{}", content))?,
        Err(StoreError::NotFound(id)) => {
            console.say(&format!("\nSorry, no data found for player {}", id))?;
            console.say("Make sure you've recorded scores for this player first!")?;
        }
        Err(e) => {
            console.say(&format!(
                "Oops! There was a problem reading the file: {}",
                e
            ))?;
        }
    }

    console.prompt("\nPress Enter to go back to the main menu...")?;
    Ok(())
}

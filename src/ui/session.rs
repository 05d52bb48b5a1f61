use std::io::{self, BufRead, Write};

use tracing::info;

use crate::error::PlacementError;
use crate::game::{Board, Piece};

use super::console::Console;
use super::menu::{Menu, DEFAULT_PROMPT};

pub const TITLE: &str = r#" a88888b.                                                dP       88888888b
d8'   `88                                                88       88
88        .d8888b. 88d888b. 88d888b. .d8888b. .d8888b. d8888P    a88aaaa    .d8888b. dP    dP 88d888b.
88        88'  `88 88'  `88 88'  `88 88ooood8 88'  `""   88       88        88'  `88 88    88 88'  `88
Y8.   .88 88.  .88 88    88 88    88 88.  ... 88.  ...   88       88        88.  .88 88.  .88 88
 Y88888P' `88888P' dP    dP dP    dP `88888P' `88888P'   dP       dP        `88888P' `88888P' dP
"#;

const QUIT_OPTION: usize = 1;

/// Console game: the main menu, the turn loop and the play-again prompt.
///
/// Player 1 plays X and always moves first.
pub struct ConnectFour<R, W> {
    console: Console<R, W>,
    board: Board<Piece>,
    main_menu: Menu,
}

impl<R: BufRead, W: Write> ConnectFour<R, W> {
    pub fn new(console: Console<R, W>, board: Board<Piece>) -> Self {
        ConnectFour {
            console,
            board,
            main_menu: Menu::play_or_quit(),
        }
    }

    pub fn board(&self) -> &Board<Piece> {
        &self.board
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Play one game to a win or a full board. Returns whether the players
    /// want another round.
    pub fn play_game(&mut self) -> io::Result<bool> {
        info!("game started");
        let mut piece = Piece::X;

        while !self.board.is_game_over() && !self.board_full() {
            self.console.print(&self.board.draw_board())?;
            self.console.say(&format!(
                "Player {}, enter the column number you wish to place a disc:",
                player_number(piece)
            ))?;

            self.make_move(piece)?;
            piece = piece.other();
        }

        self.console.print(&self.board.draw_board())?;
        self.print_winner()?;

        self.console.ask_yes_no("Do you want to play again?")
    }

    /// Show the title and menu until the players choose to quit.
    pub fn show_main_menu(&mut self) -> io::Result<()> {
        loop {
            self.console.print(TITLE)?;
            self.console.put_blank_line()?;

            self.main_menu.display(&mut self.console, 1)?;
            let option = self.main_menu.take_input(&mut self.console, DEFAULT_PROMPT)?;
            if option == QUIT_OPTION {
                break;
            }

            loop {
                let play_again = self.play_game()?;
                self.board.reset();
                if !play_again {
                    break;
                }
            }
            self.console.put_blank_line()?;
        }
        Ok(())
    }

    /// Ask for a column until the piece lands somewhere.
    fn make_move(&mut self, piece: Piece) -> io::Result<()> {
        let max = self.board.config().columns as i64 - 1;
        let error_message = format!("Invalid input. Please enter an integer between 0 and {max}.");

        loop {
            let column =
                self.console
                    .input_int_between("Enter column number: ", 0, max, &error_message)?;

            match self.board.place(piece, column as isize) {
                Ok(()) => return Ok(()),
                Err(PlacementError::ColumnFull { .. }) => {
                    self.console
                        .say("You cannot place a disc in that column, it is already full!")?;
                    self.console.put_blank_line()?;
                }
                Err(err @ PlacementError::ColumnOutOfRange { .. }) => {
                    self.console.say(&err.to_string())?;
                }
            }
        }
    }

    fn print_winner(&mut self) -> io::Result<()> {
        let message = match self.board.winner() {
            Some(piece) => {
                info!(player = player_number(piece), piece = piece.name(), "game won");
                format!("GAME OVER! Player {} wins!", player_number(piece))
            }
            None => {
                info!("game drawn");
                "GAME OVER! Good job, the game ended in a draw!".to_string()
            }
        };
        self.console.say(&message)
    }

    // Draws are the caller's business: the board only reports winners.
    fn board_full(&self) -> bool {
        (0..self.board.config().columns).all(|col| self.board.is_column_full(col as isize))
    }
}

fn player_number(piece: Piece) -> u8 {
    match piece {
        Piece::X => 1,
        Piece::O => 2,
    }
}

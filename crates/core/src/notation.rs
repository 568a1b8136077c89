//! Parser for the piece-placement notation accepted by
//! [`Board::from_placement`](crate::game::Board::from_placement).

use nom::{
    branch::alt,
    character::complete::{anychar, char},
    combinator::{map, map_opt},
    multi::{many1, separated_list1},
    IResult,
};

use crate::game::Piece;

type Row = Vec<Option<Piece>>;

fn occupied_cell(input: &str) -> IResult<&str, Row> {
    map(map_opt(anychar, Piece::from_char), |piece| vec![Some(piece)])(input)
}

fn empty_run(input: &str) -> IResult<&str, Row> {
    map_opt(anychar, |c: char| match c.to_digit(10) {
        Some(n @ 1..=8) => Some(vec![None; n as usize]),
        _ => None,
    })(input)
}

fn row(input: &str) -> IResult<&str, Row> {
    map(many1(alt((occupied_cell, empty_run))), |runs| runs.concat())(input)
}

/// Parses `/`-separated rows of piece letters and empty-run digits, top
/// row first. Row count and width are validated by the caller.
pub(crate) fn placement(input: &str) -> IResult<&str, Vec<Row>> {
    separated_list1(char('/'), row)(input)
}

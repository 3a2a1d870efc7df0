mod accumulator;
mod columns;
mod cursor;
mod engine;
mod printer;

pub(crate) use accumulator::LevelResults;
pub(crate) use cursor::TokenCursor;
pub(crate) use engine::Engine;
pub(crate) use printer::Printer;

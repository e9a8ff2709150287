//! The pretty print implementation of the [`ChipSet`](super::ChipSet), it dumps the
//! complete machine state as indented hex tables.

use super::ChipSet;
use crate::{
    definitions::{cpu, memory},
    opcode::Opcode,
};
use num_traits::Unsigned;
use once_cell::sync::Lazy;
use std::fmt::{self, UpperHex};

/// The amount of values shown in a single row
const ROW_CELLS: usize = 8;
/// The width of a single formatted value (`0x0000`)
const CELL_WIDTH: usize = 6;
/// Prefix of every value line
const VALUE_INDENT: &str = "\t\t";
const OPCODE_BYTES: usize = memory::opcodes::SIZE as usize;

/// Stands in for a run of memory rows that only hold zeros, as wide as a full row.
static ZERO_ROW: Lazy<String> = Lazy::new(|| {
    let zero = hex(0u16);
    let inner = ROW_CELLS * (CELL_WIDTH + 1) - 1 - 2 * zero.len();
    let filler = " ".repeat((inner - "...".len()) / 2);
    format!("{}{}...{}{}", zero, filler, filler, zero)
});

fn hex<T: UpperHex + Unsigned>(value: T) -> String {
    format!("{:#06X}", value)
}

/// The index range a row covers, `0x0000 - 0x0007 :`
fn label(from: usize, to: usize) -> String {
    format!("{} - {} :", hex(from), hex(to))
}

/// Will lay the values out in rows, each row prefixed with the index range it covers.
fn table<T>(values: &[T], cell: impl Fn(&T) -> String) -> Vec<String> {
    values
        .chunks(ROW_CELLS)
        .enumerate()
        .map(|(row, chunk)| {
            let from = row * ROW_CELLS;
            let cells: Vec<String> = chunk.iter().map(&cell).collect();
            let line = format!("{} {}", label(from, from + chunk.len() - 1), cells.join(" "));
            line.trim_end().to_string()
        })
        .collect()
}

struct MemoryRow {
    from: usize,
    to: usize,
    /// `None` if the row only holds zeros
    opcodes: Option<Vec<Opcode>>,
}

/// Will lay the raw memory out as big-endian opcodes, a run of zero rows
/// collapses into a single filler row.
fn memory_table(data: &[u8]) -> Vec<String> {
    let row_bytes = ROW_CELLS * OPCODE_BYTES;
    let mut rows: Vec<MemoryRow> = Vec::with_capacity(data.len() / row_bytes);

    for (index, chunk) in data.chunks(row_bytes).enumerate() {
        let from = index * row_bytes;
        let to = from + chunk.len() - 1;
        let opcodes: Vec<Opcode> = chunk
            .chunks(OPCODE_BYTES)
            .map(|pair| pair.iter().fold(0 as Opcode, |acc, &byte| acc << 8 | byte as Opcode))
            .collect();

        if opcodes.iter().any(|&opcode| opcode != 0) {
            rows.push(MemoryRow {
                from,
                to,
                opcodes: Some(opcodes),
            });
            continue;
        }
        if let Some(MemoryRow {
            to: end,
            opcodes: None,
            ..
        }) = rows.last_mut()
        {
            *end = to;
            continue;
        }
        rows.push(MemoryRow {
            from,
            to,
            opcodes: None,
        });
    }

    rows.into_iter()
        .map(|row| {
            let body = match row.opcodes {
                Some(opcodes) => {
                    let cells: Vec<String> = opcodes.into_iter().map(hex).collect();
                    cells.join(" ")
                }
                None => ZERO_ROW.clone(),
            };
            format!("{} {}", label(row.from, row.to), body)
        })
        .collect()
}

impl fmt::Display for ChipSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // unused stack slots are shown as zero
        let mut stack = [0u16; cpu::stack::SIZE];
        stack[..self.stack.len()].copy_from_slice(&self.stack);

        let sections = [
            ("Program Name", vec![self.get_name().to_string()]),
            ("Opcode", vec![hex(self.opcode)]),
            ("Program Counter", vec![hex(self.program_counter)]),
            ("Index Register", vec![hex(self.index_register)]),
            ("Delay Timer", vec![hex(self.get_delay_timer())]),
            ("Sound Timer", vec![hex(self.get_sound_timer())]),
            ("Memory", memory_table(self.memory.as_slice())),
            (
                "Keyboard",
                table(self.keyboard.get_keys(), |pressed| {
                    format!("{:<width$}", pressed, width = CELL_WIDTH)
                }),
            ),
            ("Stack", table(&stack, |&entry| hex(entry))),
            ("Register", table(&self.registers, |&value| hex(value))),
        ];

        writeln!(f, "Chipset {{")?;
        for (title, lines) in sections.iter() {
            writeln!(f, "\t{} :", title)?;
            for line in lines {
                writeln!(f, "{}{}", VALUE_INDENT, line)?;
            }
        }
        write!(f, "}}")
    }
}

//! CSV reading operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result, anyhow, ensure};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, DataType}};

use crate::types::{County, RecordKind, State};

/// Reads a CSV file with a header row from `path` into a Polars DataFrame.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Convert a DataFrame with the state columns into `State` records, in row order.
pub(crate) fn states_from_frame(df: &DataFrame) -> Result<Vec<State>> {
    ensure_columns(df, RecordKind::State)?;

    let names = text_column(df, "name")?;
    let area = float_column(df, "area_sq_mi")?;
    let land = float_column(df, "land_area_sq_mi")?;
    let water = float_column(df, "water_area_sq_mi")?;
    let population = int_column::<u64>(df, "population")?;
    let rep = int_column::<u32>(df, "n_rep_votes")?;
    let senate = int_column::<u32>(df, "n_senate_votes")?;
    let ec = int_column::<u32>(df, "n_ec_votes")?;

    Ok((0..df.height())
        .map(|i| State {
            name: names[i].clone(),
            area_sq_mi: area[i],
            land_area_sq_mi: land[i],
            water_area_sq_mi: water[i],
            population: population[i],
            n_rep_votes: rep[i],
            n_senate_votes: senate[i],
            n_ec_votes: ec[i],
        })
        .collect())
}

/// Convert a DataFrame with the county columns into `County` records, in row order.
pub(crate) fn counties_from_frame(df: &DataFrame) -> Result<Vec<County>> {
    ensure_columns(df, RecordKind::County)?;

    let names = text_column(df, "name")?;
    let seats = text_column(df, "county_seat")?;
    let population = int_column::<u64>(df, "population")?;
    let area = float_column(df, "area_sq_mi")?;

    Ok(names.into_iter()
        .zip(seats)
        .zip(population.into_iter().zip(area))
        .map(|((name, county_seat), (population, area_sq_mi))| County { name, county_seat, population, area_sq_mi })
        .collect())
}

fn ensure_columns(df: &DataFrame, kind: RecordKind) -> Result<()> {
    let present = df.get_column_names();
    for &column in kind.columns() {
        ensure!(present.iter().any(|c| c.as_str() == column),
            "[io::csv::read] {kind} CSV is missing column '{column}'");
    }
    Ok(())
}

fn text_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    column.str()?.into_iter()
        .enumerate()
        .map(|(row, value)| value
            .map(str::to_string)
            .ok_or_else(|| anyhow!("[io::csv::read] Missing value in column '{name}' at row {row}")))
        .collect()
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    column.f64()?.into_iter()
        .enumerate()
        .map(|(row, value)| value
            .ok_or_else(|| anyhow!("[io::csv::read] Missing or non-numeric value in column '{name}' at row {row}")))
        .collect()
}

fn int_column<T: TryFrom<i64>>(df: &DataFrame, name: &str) -> Result<Vec<T>> {
    let column = df.column(name)?;
    // Casting a float or string column to Int64 truncates or nulls values instead of failing.
    ensure!(column.dtype().is_integer() || column.dtype() == &DataType::Null,
        "[io::csv::read] Column '{name}' must hold whole numbers, found {}", column.dtype());
    let column = column.cast(&DataType::Int64)?;
    column.i64()?.into_iter()
        .enumerate()
        .map(|(row, value)| {
            let value = value.ok_or_else(|| anyhow!(
                "[io::csv::read] Missing or non-integer value in column '{name}' at row {row}"))?;
            T::try_from(value).map_err(|_| anyhow!(
                "[io::csv::read] Value {value} in column '{name}' at row {row} is out of range"))
        })
        .collect()
}

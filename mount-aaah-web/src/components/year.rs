use chrono::{Datelike, Local};

use crate::consts::YEAR_ID;
use crate::utils::element_by_id;
use crate::Error;

/// Writes the current year into the footer and returns it.
pub fn set_year() -> Result<i32, Error> {
    let element = element_by_id(YEAR_ID)?;

    let year = Local::now().year();
    element.set_text_content(Some(&year.to_string()));

    Ok(year)
}

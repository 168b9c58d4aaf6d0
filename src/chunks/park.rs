use crate::reader::{Reader, ReaderError};

/// Park finances, ratings, and the rolling history tables
///
/// Every money field is stored unsigned, see [`Reader::read_money`]. The
/// expenditure table is the only variable-shaped structure in the format:
/// its `num_months` by `num_types` dimensions are stored immediately before
/// the row-major cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParkChunk {
    pub name: String,
    pub cash: u64,
    pub loan: u64,
    pub max_loan: u64,
    pub loan_interest_rate: u32,
    pub park_flags: u64,
    pub entrance_fee: u64,
    pub staff_handyman_colour: u32,
    pub staff_mechanic_colour: u32,
    pub staff_security_colour: u32,
    pub same_price_throughout: u64,
    pub num_months: u32,
    pub num_types: u32,

    /// `num_months` rows of `num_types` money cells
    pub expenditure_table: Vec<Vec<u64>>,
    pub historical_profit: u64,
    pub marketing_campaigns: Vec<u64>,
    pub current_awards: Vec<u64>,
    pub park_value: u64,
    pub company_value: u64,
    pub park_size: u32,
    pub num_guests_in_park: u32,
    pub num_guests_heading_for_park: u32,
    pub park_rating: u32,
    pub park_rating_casualty_penalty: u32,
    pub current_expenditure: u64,
    pub current_profit: u64,
    pub weekly_profit_average_dividend: u64,
    pub weekly_profit_average_divisor: u32,
    pub total_admissions: u64,
    pub total_income_from_admissions: u64,
    pub total_ride_value_for_money: u64,
    pub num_guests_in_park_last_week: u32,
    pub guest_change_modifier: u32,
    pub guest_generation_probability: u32,
    pub suggested_guest_maximum: u32,
    pub peep_warning_throttle: Vec<u64>,
    pub park_rating_history: Vec<u64>,
    pub guests_in_park_history: Vec<u64>,
    pub cash_history: Vec<u64>,
    pub weekly_profit_history: Vec<u64>,
    pub park_value_history: Vec<u64>,
}

impl ParkChunk {
    pub(crate) fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        let name = reader.read_string()?;
        let cash = reader.read_money(8)?;
        let loan = reader.read_money(8)?;
        let max_loan = reader.read_money(8)?;
        let loan_interest_rate = reader.read_u32()?;
        let park_flags = reader.read_u64()?;
        let entrance_fee = reader.read_money(4)?;
        let staff_handyman_colour = reader.read_u32()?;
        let staff_mechanic_colour = reader.read_u32()?;
        let staff_security_colour = reader.read_u32()?;
        let same_price_throughout = reader.read_u64()?;

        // dimensions precede the table itself
        let num_months = reader.read_u32()?;
        let num_types = reader.read_u32()?;
        let mut expenditure_table = Vec::new();
        for _ in 0..num_months {
            let mut row = Vec::new();
            for _ in 0..num_types {
                row.push(reader.read_money(8)?);
            }
            expenditure_table.push(row);
        }

        Ok(ParkChunk {
            name,
            cash,
            loan,
            max_loan,
            loan_interest_rate,
            park_flags,
            entrance_fee,
            staff_handyman_colour,
            staff_mechanic_colour,
            staff_security_colour,
            same_price_throughout,
            num_months,
            num_types,
            expenditure_table,
            historical_profit: reader.read_money(8)?,
            marketing_campaigns: reader.read_uint_array()?,
            current_awards: reader.read_uint_array()?,
            park_value: reader.read_money(8)?,
            company_value: reader.read_money(8)?,
            park_size: reader.read_u32()?,
            num_guests_in_park: reader.read_u32()?,
            num_guests_heading_for_park: reader.read_u32()?,
            park_rating: reader.read_u32()?,
            park_rating_casualty_penalty: reader.read_u32()?,
            current_expenditure: reader.read_money(8)?,
            current_profit: reader.read_money(8)?,
            weekly_profit_average_dividend: reader.read_money(8)?,
            weekly_profit_average_divisor: reader.read_u32()?,
            total_admissions: reader.read_money(8)?,
            total_income_from_admissions: reader.read_money(8)?,
            total_ride_value_for_money: reader.read_money(4)?,
            num_guests_in_park_last_week: reader.read_u32()?,
            guest_change_modifier: reader.read_u32()?,
            guest_generation_probability: reader.read_u32()?,
            suggested_guest_maximum: reader.read_u32()?,
            peep_warning_throttle: reader.read_uint_array()?,
            park_rating_history: reader.read_uint_array()?,
            guests_in_park_history: reader.read_uint_array()?,
            cash_history: reader.read_uint_array()?,
            weekly_profit_history: reader.read_uint_array()?,
            park_value_history: reader.read_uint_array()?,
        })
    }
}

pub mod kmz;
pub mod mavlink;

use crate::{model::PlanContents, FPResult};

/// Trait implemented by protocols which read flight plans.
pub trait PlanDecoder {
    /// Decode `text` into a complete plan. `Ok(None)` means the input denotes "no plan".
    fn decode(&self, text: &str) -> FPResult<Option<PlanContents>>;
}

/// Trait implemented by protocols which write flight plans.
pub trait PlanEncoder {
    fn encode(&self, plan: &PlanContents) -> FPResult<String>;
}

/// Parse a complete numeric field.
pub(crate) fn parse_f64(field: &str) -> FPResult<f64> {
    use nom::{combinator::all_consuming, number::complete::double, Finish, IResult};

    let res: IResult<&str, f64> = all_consuming(double)(field);
    res.finish().map(|(_, value)| value).map_err(|e| e.into())
}

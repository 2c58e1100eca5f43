use crate::model::SourceSetModel;
use crate::policy::EffectiveConfig;
use ternguard_types::Finding;

mod multiline_ternary;
mod parse_failures;


pub fn run_all(model: &SourceSetModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    multiline_ternary::run(model, cfg, out);
    parse_failures::run(model, out);
}

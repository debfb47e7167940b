pub use self::{
    agility::AgilityEvaluator, aim::AimEvaluator, flashlight::FlashlightEvaluator,
    flow_aim::FlowAimEvaluator, speed::SpeedEvaluator,
};

mod agility;
mod aim;
mod flashlight;
mod flow_aim;
mod speed;

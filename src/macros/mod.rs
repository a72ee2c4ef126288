// crate::phonenumberutil::helper_types::OperatorDetails
// std::option::Option

/// This macro builds a compiled-in `OperatorDetails` value
///
/// Table rows differ mostly in the provinces they were allocated to,
/// so everything except operator and sim type is optional:
///
/// `operator_details!(Operator::Mci, SimType::Both, provinces = ["Tehran"], model = "TD-LTE")`
macro_rules! operator_details {
    (@model) => {
        None
    };
    (@model $model:literal) => {
        Some($model)
    };
    (
        $operator:expr, $sim_type:expr
        $(, provinces = [$($province:literal),* $(,)?])?
        $(, model = $model:literal)?
        $(,)?
    ) => {
        $crate::phonenumberutil::helper_types::OperatorDetails {
            operator: $operator,
            name: $operator.name(),
            provinces: &[$($($province),*)?],
            sim_type: $sim_type,
            model: $crate::macros::operator_details!(@model $($model)?),
        }
    };
}

pub(crate) use operator_details;

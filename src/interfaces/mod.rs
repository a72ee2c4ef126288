use crate::phonenumberutil::helper_types::OperatorDetails;

/// Internal operator lookup API used to isolate the storage of operator
/// code allocations from the engine that walks over them.
pub(crate) trait OperatorLookupApi {
    /// Returns details for the given 3 digit operator code if the code is
    /// allocated to this operator.
    fn find_details(&self, operator_code: &str) -> Option<&OperatorDetails>;

    /// Returns every operator code this lookup knows about, in allocation order.
    fn operator_codes(&self) -> impl Iterator<Item = &'static str>;
}

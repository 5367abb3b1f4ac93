use crate::source::{StationRecord, TripRecord};

#[derive(Default, Debug)]
pub struct SourceData {
    pub stations: Vec<StationRecord>,
    pub trips: Vec<TripRecord>,
}

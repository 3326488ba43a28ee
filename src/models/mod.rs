pub mod clock_event;
pub mod extra_request;
pub mod status;
pub mod time_record;
pub mod value_type;
pub mod work_day;

pub use clock_event::ClockEvent;
pub use extra_request::ExtraRequest;
pub use status::RequestStatus;
pub use time_record::TimeRecord;
pub use value_type::ValueType;
pub use work_day::WorkDay;

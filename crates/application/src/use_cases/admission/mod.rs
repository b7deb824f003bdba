mod admit_request;

pub use admit_request::AdmitRequestUseCase;

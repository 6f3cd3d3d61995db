//! Ports - Interfaces between the transformers and the host application

pub mod outbound;

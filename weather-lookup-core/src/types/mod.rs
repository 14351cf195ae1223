//! 类型定义模块

mod lookup;

pub use lookup::{LookupSnapshot, LookupState, Step, WeatherResult};

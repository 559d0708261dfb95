mod tags;
pub use tags::Tags;
pub(crate) use tags::put_num;
pub(crate) use tags::put_text;

mod author;
mod code;
mod country;
mod denomination;
mod id;
mod kind;
mod publisher;
mod title;
mod year;

pub use self::{
    author::*, code::*, country::*, denomination::*, id::*, kind::*, publisher::*, title::*, year::*,
};

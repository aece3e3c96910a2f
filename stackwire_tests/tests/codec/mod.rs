mod depth;
mod named;
mod range;
mod round_trip;

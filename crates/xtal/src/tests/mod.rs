mod cell;
mod expt;
mod frame;
mod provider;

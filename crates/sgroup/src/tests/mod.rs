mod groups;
mod subgroups;

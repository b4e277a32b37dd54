mod helpers;
mod view;

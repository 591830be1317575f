mod current_user;
mod gates;
mod login;

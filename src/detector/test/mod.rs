mod feed;
mod track;

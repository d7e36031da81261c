mod rational1;
